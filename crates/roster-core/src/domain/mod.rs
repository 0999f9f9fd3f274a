//! # Domain Models
//!
//! Records exchanged with the remote student service, expressed with the
//! names the rest of the crate uses. Wire-level shapes live in
//! [`crate::wire`].
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Student`] | Stored record with a server-assigned id |
//! | [`StudentDraft`] | Create/update payload without an id |
//! | [`DeletionSummary`] | Outcome of the administrative bulk delete |
//! | [`StudentId`] | Server-assigned identifier |

mod student;

pub use student::{DeletionSummary, Student, StudentDraft, StudentId};
