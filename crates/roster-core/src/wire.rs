//! JSON shapes spoken by the remote service.
//!
//! The service uses Spanish field names; these types exist only to translate
//! them into the domain records.

use serde::{Deserialize, Serialize};

use crate::{DeletionSummary, Student, StudentDraft, StudentId};

/// `{ "id", "nombre", "edad" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub id: i64,
    pub nombre: String,
    pub edad: i64,
}

impl From<StudentPayload> for Student {
    fn from(payload: StudentPayload) -> Self {
        Student::new(StudentId::new(payload.id), payload.nombre, payload.edad)
    }
}

/// `{ "nombre", "edad" }` request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPayload {
    pub nombre: String,
    pub edad: i64,
}

impl From<&StudentDraft> for DraftPayload {
    fn from(draft: &StudentDraft) -> Self {
        Self {
            nombre: draft.name.clone(),
            edad: draft.age,
        }
    }
}

/// `{ "mensaje", "eliminados", "restantes" }` returned by the bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllPayload {
    pub mensaje: String,
    pub eliminados: i64,
    pub restantes: i64,
}

impl From<DeleteAllPayload> for DeletionSummary {
    fn from(payload: DeleteAllPayload) -> Self {
        DeletionSummary {
            message: payload.mensaje,
            deleted_count: payload.eliminados,
            remaining_count: payload.restantes,
        }
    }
}
