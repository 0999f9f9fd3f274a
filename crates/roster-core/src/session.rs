//! Presentation-facing state for a student CRUD screen.
//!
//! [`StudentSession`] drives a [`StudentService`] and publishes every state
//! change as a complete [`SessionState`] snapshot on a `tokio::sync::watch`
//! channel. Snapshots are never edited in place: each transition clones the
//! current one, applies the change, and replaces it.
//!
//! Mutations follow one flow: mark loading, call the service, reload the
//! list, then report. A failed call leaves the previous list untouched.

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::service::{ServiceFuture, StudentError, StudentService};
use crate::{Student, StudentDraft, StudentId, ValidationError};

/// One immutable view of the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Last successfully fetched list.
    pub students: Vec<Student>,
    /// Form text for the name field.
    pub name: String,
    /// Form text for the age field; parsed only on submit.
    pub age: String,
    pub selected_id: Option<StudentId>,
    pub loading: bool,
    pub error: Option<String>,
    pub info: Option<String>,
}

pub struct StudentSession<S> {
    service: S,
    state: watch::Sender<SessionState>,
}

impl<S> StudentSession<S>
where
    S: StudentService,
{
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { service, state }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Receiver that observes every published snapshot from now on.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn set_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_state(|state| state.name = value);
    }

    pub fn set_age(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_state(|state| state.age = value);
    }

    /// Load `student` into the form for editing.
    pub fn select(&self, student: &Student) {
        self.update_state(|state| {
            state.selected_id = Some(student.id);
            state.name = student.name.clone();
            state.age = student.age.to_string();
            state.error = None;
            state.info = Some(format!("selected student id {}", student.id));
        });
    }

    pub fn clear_selection(&self) {
        self.update_state(|state| {
            clear_form(state);
            state.error = None;
            state.info = Some(String::from("selection cleared"));
        });
    }

    /// Replace the list with the server's current contents.
    pub async fn refresh(&self) {
        self.begin();
        match self.service.list_students().await {
            Ok(students) => {
                debug!(count = students.len(), "session list refreshed");
                self.update_state(|state| {
                    state.students = students;
                    state.loading = false;
                });
            }
            Err(error) => self.fail("could not load students", &error),
        }
    }

    /// Create a student from the form, then clear the form.
    pub async fn add(&self) {
        let draft = match self.draft_from_form() {
            Ok(draft) => draft,
            Err(error) => return self.reject(&error),
        };

        self.run_mutation(
            "could not add student",
            self.service.create_student(draft),
            |state, _created| {
                clear_form(state);
                state.info = Some(String::from("student added"));
            },
        )
        .await;
    }

    /// Save the form over the selected student.
    pub async fn update(&self) {
        let selected = self.state.borrow().selected_id;
        let Some(id) = selected else {
            return self.reject(&ValidationError::NoSelection);
        };
        let draft = match self.draft_from_form() {
            Ok(draft) => draft,
            Err(error) => return self.reject(&error),
        };

        self.run_mutation(
            "could not update student",
            self.service.update_student(id, draft),
            |state, _updated| {
                state.info = Some(String::from("student updated"));
            },
        )
        .await;
    }

    pub async fn remove(&self, id: StudentId) {
        self.run_mutation(
            "could not delete student",
            self.service.delete_student(id),
            move |state, ()| {
                if state.selected_id == Some(id) {
                    clear_form(state);
                }
                state.info = Some(String::from("student deleted"));
            },
        )
        .await;
    }

    /// Bulk delete. Without `confirm` the service refuses and the error is shown.
    pub async fn delete_all(&self, confirm: bool) {
        self.run_mutation(
            "could not delete all students",
            self.service.delete_all_students(confirm),
            |state, summary| {
                clear_form(state);
                state.info = Some(format!(
                    "deleted {} students ({} remaining)",
                    summary.deleted_count, summary.remaining_count
                ));
            },
        )
        .await;
    }

    async fn run_mutation<T, F>(&self, context: &str, call: ServiceFuture<'_, T>, apply: F)
    where
        F: FnOnce(&mut SessionState, T),
    {
        self.begin();
        let value = match call.await {
            Ok(value) => value,
            Err(error) => return self.fail(context, &error),
        };

        let reloaded = self.service.list_students().await;
        self.update_state(|state| {
            apply(state, value);
            state.loading = false;
            match reloaded {
                Ok(students) => state.students = students,
                Err(error) => {
                    state.info = None;
                    state.error = Some(format!("could not load students: {}", error.message()));
                }
            }
        });
    }

    fn draft_from_form(&self) -> Result<StudentDraft, ValidationError> {
        let state = self.state.borrow();
        StudentDraft::from_form(&state.name, &state.age)
    }

    fn begin(&self) {
        self.update_state(|state| {
            state.loading = true;
            state.error = None;
            state.info = None;
        });
    }

    fn fail(&self, context: &str, error: &StudentError) {
        debug!(code = error.code(), "{context}: {}", error.message());
        let message = format!("{context}: {}", error.message());
        self.update_state(|state| {
            state.loading = false;
            state.error = Some(message);
        });
    }

    fn reject(&self, error: &ValidationError) {
        let message = error.to_string();
        self.update_state(|state| {
            state.info = None;
            state.error = Some(message);
        });
    }

    fn update_state(&self, edit: impl FnOnce(&mut SessionState)) {
        let mut next = self.state.borrow().clone();
        edit(&mut next);
        self.state.send_replace(next);
    }
}

fn clear_form(state: &mut SessionState) {
    state.selected_id = None;
    state.name.clear();
    state.age.clear();
}
