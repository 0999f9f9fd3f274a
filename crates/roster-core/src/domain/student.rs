use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Server-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student record as held by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Mutable fields of this record as a draft.
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft::new(self.name.clone(), self.age)
    }
}

/// Create/update payload. Carries no id; fields are sent exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub age: i64,
}

impl StudentDraft {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Build a draft from raw form input.
    ///
    /// The name is trimmed and must not be empty; the age must parse as an integer.
    pub fn from_form(name: &str, age: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let age = age
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAge {
                value: age.to_owned(),
            })?;

        Ok(Self::new(name, age))
    }
}

/// Result of the administrative bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionSummary {
    pub message: String,
    pub deleted_count: i64,
    pub remaining_count: i64,
}
