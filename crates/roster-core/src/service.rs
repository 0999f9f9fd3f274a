//! Student service contract and its error taxonomy.
//!
//! [`StudentService`] is the seam between the remote client and its
//! consumers (the session, the CLI). Every failure crossing that seam is a
//! [`StudentError`] whose [`StudentErrorKind`] is chosen by one rule shared
//! by all operations:
//!
//! | HTTP / condition | Kind |
//! |------------------|------|
//! | 401 | [`StudentErrorKind::Unauthorized`] |
//! | 404 | [`StudentErrorKind::NotFound`] |
//! | 400 | [`StudentErrorKind::InvalidRequest`] |
//! | 500 | [`StudentErrorKind::ServerError`] |
//! | other non-2xx | [`StudentErrorKind::UnexpectedStatus`] |
//! | deadline expired | [`StudentErrorKind::Timeout`] |
//! | no response received | [`StudentErrorKind::ConnectionError`] |
//! | 2xx without a required body | [`StudentErrorKind::EmptyResponse`] |
//! | anything else | [`StudentErrorKind::UnknownError`] |
//!
//! Only the message text depends on the operation.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::http_client::{HttpError, HttpErrorKind, HttpResponse};
use crate::{DeletionSummary, Student, StudentDraft, StudentId};

/// Boxed future returned by [`StudentService`] operations.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StudentError>> + Send + 'a>>;

/// Remote operation identifier, used for messages and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    DeleteAll,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::DeleteAll,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::DeleteAll => "delete_all",
        }
    }

    const fn activity(self) -> &'static str {
        match self {
            Self::List => "listing students",
            Self::Get => "fetching student",
            Self::Create => "creating student",
            Self::Update => "updating student",
            Self::Delete => "deleting student",
            Self::DeleteAll => "deleting all students",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error classification shared by every student operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentErrorKind {
    Unauthorized,
    NotFound,
    InvalidRequest,
    ServerError,
    UnexpectedStatus(u16),
    Timeout,
    ConnectionError,
    EmptyResponse,
    UnknownError,
}

impl StudentErrorKind {
    /// Kind for an HTTP status, or `None` when the status is 2xx.
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(Self::InvalidRequest),
            401 => Some(Self::Unauthorized),
            404 => Some(Self::NotFound),
            500 => Some(Self::ServerError),
            other => Some(Self::UnexpectedStatus(other)),
        }
    }

    /// Kind for a failure where no response was received.
    pub const fn from_transport(kind: HttpErrorKind) -> Self {
        match kind {
            HttpErrorKind::Timeout => Self::Timeout,
            HttpErrorKind::Connect | HttpErrorKind::Body => Self::ConnectionError,
            HttpErrorKind::Request => Self::UnknownError,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Unauthorized => "student.unauthorized",
            Self::NotFound => "student.not_found",
            Self::InvalidRequest => "student.invalid_request",
            Self::ServerError => "student.server_error",
            Self::UnexpectedStatus(_) => "student.unexpected_status",
            Self::Timeout => "student.timeout",
            Self::ConnectionError => "student.connection_error",
            Self::EmptyResponse => "student.empty_response",
            Self::UnknownError => "student.unknown_error",
        }
    }
}

/// Structured failure of a student operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentError {
    kind: StudentErrorKind,
    operation: Operation,
    status: Option<u16>,
    message: String,
}

impl StudentError {
    pub fn new(kind: StudentErrorKind, operation: Operation, message: impl Into<String>) -> Self {
        Self {
            kind,
            operation,
            status: None,
            message: message.into(),
        }
    }

    /// Map a non-2xx response. `target` is the id the operation addressed, if any.
    pub fn from_response(
        operation: Operation,
        target: Option<StudentId>,
        response: &HttpResponse,
    ) -> Self {
        let kind = StudentErrorKind::from_status(response.status)
            .unwrap_or(StudentErrorKind::UnknownError);
        let activity = operation.activity();

        let message = match kind {
            StudentErrorKind::Unauthorized => {
                format!("unauthorized while {activity}: api key is invalid or missing")
            }
            StudentErrorKind::NotFound => match target {
                Some(id) => format!("student not found (id={id})"),
                None => format!("resource not found while {activity}"),
            },
            StudentErrorKind::InvalidRequest => match operation {
                Operation::Create | Operation::Update => {
                    format!("invalid data while {activity}: check name and age")
                }
                Operation::DeleteAll => String::from("bulk delete requires explicit confirmation"),
                _ => format!("invalid request while {activity}"),
            },
            StudentErrorKind::ServerError => format!("internal server error while {activity}"),
            _ => {
                let body = response.body.trim();
                if body.is_empty() {
                    format!("unexpected status {} while {activity}", response.status)
                } else {
                    format!(
                        "unexpected status {} while {activity}: {body}",
                        response.status
                    )
                }
            }
        };

        Self {
            kind,
            operation,
            status: Some(response.status),
            message,
        }
    }

    /// Map a transport failure (no response received).
    pub fn from_transport(operation: Operation, error: &HttpError) -> Self {
        let kind = StudentErrorKind::from_transport(error.kind());
        let activity = operation.activity();
        let message = match kind {
            StudentErrorKind::Timeout => {
                format!("timed out while {activity}: {}", error.message())
            }
            StudentErrorKind::ConnectionError => {
                format!("connection error while {activity}: {}", error.message())
            }
            _ => format!("unexpected error while {activity}: {}", error.message()),
        };
        Self::new(kind, operation, message)
    }

    /// 2xx response without the body the operation needs.
    pub fn empty_response(operation: Operation, status: u16) -> Self {
        Self {
            kind: StudentErrorKind::EmptyResponse,
            operation,
            status: Some(status),
            message: format!(
                "empty response from server while {} (status {status})",
                operation.activity()
            ),
        }
    }

    /// 2xx response whose body could not be decoded.
    pub fn malformed_body(operation: Operation, status: u16, detail: impl Display) -> Self {
        Self {
            kind: StudentErrorKind::UnknownError,
            operation,
            status: Some(status),
            message: format!(
                "unexpected response body while {}: {detail}",
                operation.activity()
            ),
        }
    }

    pub fn unconfirmed_bulk_delete() -> Self {
        Self::new(
            StudentErrorKind::InvalidRequest,
            Operation::DeleteAll,
            "bulk delete requires explicit confirmation",
        )
    }

    pub const fn kind(&self) -> StudentErrorKind {
        self.kind
    }

    pub const fn operation(&self) -> Operation {
        self.operation
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl Display for StudentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for StudentError {}

/// Operations offered by the remote student service.
///
/// Implementations must be `Send + Sync`; the session holds one for its
/// whole lifetime and calls it from whichever task triggered an action.
pub trait StudentService: Send + Sync {
    fn list_students<'a>(&'a self) -> ServiceFuture<'a, Vec<Student>>;

    /// # Errors
    ///
    /// [`StudentErrorKind::NotFound`] when no student has `id`.
    fn get_student<'a>(&'a self, id: StudentId) -> ServiceFuture<'a, Student>;

    /// The returned record carries the server-assigned id.
    fn create_student<'a>(&'a self, draft: StudentDraft) -> ServiceFuture<'a, Student>;

    /// # Errors
    ///
    /// [`StudentErrorKind::NotFound`] when no student has `id`.
    fn update_student<'a>(&'a self, id: StudentId, draft: StudentDraft)
        -> ServiceFuture<'a, Student>;

    /// # Errors
    ///
    /// [`StudentErrorKind::NotFound`] when no student has `id`.
    fn delete_student<'a>(&'a self, id: StudentId) -> ServiceFuture<'a, ()>;

    /// # Errors
    ///
    /// [`StudentErrorKind::InvalidRequest`] when `confirm` is false.
    fn delete_all_students<'a>(&'a self, confirm: bool) -> ServiceFuture<'a, DeletionSummary>;
}
