//! # Roster Core
//!
//! Client contract for the remote student service.
//!
//! ## Overview
//!
//! - **Domain models** for students, drafts and bulk-delete summaries
//! - **HTTP transport abstraction** with a reqwest implementation
//! - **Remote client** issuing the six service operations with an API key
//! - **Error taxonomy** mapping statuses and transport failures to one kind
//! - **Session state** published as immutable snapshots for a CRUD screen
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `RemoteStudentClient` |
//! | [`config`] | Base URL, API key and timeout |
//! | [`domain`] | `Student`, `StudentDraft`, `DeletionSummary` |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Validation and configuration errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`service`] | `StudentService` trait and `StudentError` |
//! | [`session`] | Snapshot-based screen state |
//! | [`wire`] | JSON shapes used by the remote service |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_core::{ClientConfig, RemoteStudentClient, StudentDraft, StudentService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RemoteStudentClient::new(ClientConfig::from_env()?)?;
//!
//!     let created = client.create_student(StudentDraft::new("Ana", 20)).await?;
//!     println!("created id {}", created.id);
//!
//!     for student in client.list_students().await? {
//!         println!("{} {} {}", student.id, student.name, student.age);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use roster_core::{StudentError, StudentErrorKind};
//!
//! fn describe(error: &StudentError) -> &'static str {
//!     match error.kind() {
//!         StudentErrorKind::Unauthorized => "check the api key",
//!         StudentErrorKind::NotFound => "refresh the list",
//!         StudentErrorKind::Timeout | StudentErrorKind::ConnectionError => "try again",
//!         _ => "report it",
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod service;
pub mod session;
pub mod wire;

pub use client::RemoteStudentClient;

pub use config::ClientConfig;

pub use domain::{DeletionSummary, Student, StudentDraft, StudentId};

pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};

pub use error::{ConfigError, ValidationError};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};

pub use service::{Operation, ServiceFuture, StudentError, StudentErrorKind, StudentService};

pub use session::{SessionState, StudentSession};
