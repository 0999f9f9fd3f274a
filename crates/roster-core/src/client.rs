use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::service::{Operation, ServiceFuture, StudentError, StudentErrorKind, StudentService};
use crate::wire::{DeleteAllPayload, DraftPayload, StudentPayload};
use crate::{ConfigError, DeletionSummary, Student, StudentDraft, StudentId};

const COLLECTION_PATH: &str = "estudiantes/";
const DELETE_ALL_PATH: &str = "estudiantes/admin/delete-all?confirmacion=true";

/// Client for the remote student service.
///
/// Owns its configuration; every request carries the configured API key and
/// timeout. Failures are never retried here.
#[derive(Clone)]
pub struct RemoteStudentClient {
    config: ClientConfig,
    auth: HttpAuth,
    http_client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for RemoteStudentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStudentClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RemoteStudentClient {
    /// Client over a reqwest transport whose connect timeout matches `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport =
            ReqwestHttpClient::with_connect_timeout(config.timeout()).map_err(|error| {
                ConfigError::Transport {
                    message: error.message().to_owned(),
                }
            })?;
        Self::with_http_client(config, Arc::new(transport))
    }

    pub fn with_http_client(
        config: ClientConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            auth: HttpAuth::api_key(config.api_key()),
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn student_url(&self, id: StudentId) -> String {
        self.config.endpoint(&format!("{COLLECTION_PATH}{id}"))
    }

    async fn send(
        &self,
        operation: Operation,
        target: Option<StudentId>,
        request: HttpRequest,
    ) -> Result<HttpResponse, StudentError> {
        let request = request
            .with_auth(&self.auth)
            .with_timeout(self.config.timeout());
        debug!(
            operation = %operation,
            method = %request.method,
            url = %request.url,
            "dispatching student request"
        );

        let response = self.http_client.execute(request).await.map_err(|error| {
            let mapped = StudentError::from_transport(operation, &error);
            warn!(operation = %operation, code = mapped.code(), "{}", mapped.message());
            mapped
        })?;

        if !response.is_success() {
            let mapped = StudentError::from_response(operation, target, &response);
            warn!(
                operation = %operation,
                status = response.status,
                code = mapped.code(),
                "{}",
                mapped.message()
            );
            return Err(mapped);
        }

        Ok(response)
    }

    async fn send_with_draft(
        &self,
        operation: Operation,
        target: Option<StudentId>,
        request: HttpRequest,
        draft: &StudentDraft,
    ) -> Result<Student, StudentError> {
        let body = serde_json::to_string(&DraftPayload::from(draft)).map_err(|error| {
            StudentError::new(
                StudentErrorKind::UnknownError,
                operation,
                format!("could not encode student draft: {error}"),
            )
        })?;

        let response = self
            .send(operation, target, request.with_json_body(body))
            .await?;
        decode::<StudentPayload>(operation, &response).map(Student::from)
    }
}

impl StudentService for RemoteStudentClient {
    fn list_students<'a>(&'a self) -> ServiceFuture<'a, Vec<Student>> {
        Box::pin(async move {
            let request = HttpRequest::get(self.config.endpoint(COLLECTION_PATH));
            let response = self.send(Operation::List, None, request).await?;
            let payload = decode::<Vec<StudentPayload>>(Operation::List, &response)?;

            debug!(count = payload.len(), "listed students");
            Ok(payload.into_iter().map(Student::from).collect())
        })
    }

    fn get_student<'a>(&'a self, id: StudentId) -> ServiceFuture<'a, Student> {
        Box::pin(async move {
            let request = HttpRequest::get(self.student_url(id));
            let response = self.send(Operation::Get, Some(id), request).await?;
            decode::<StudentPayload>(Operation::Get, &response).map(Student::from)
        })
    }

    fn create_student<'a>(&'a self, draft: StudentDraft) -> ServiceFuture<'a, Student> {
        Box::pin(async move {
            let request = HttpRequest::post(self.config.endpoint(COLLECTION_PATH));
            let created = self
                .send_with_draft(Operation::Create, None, request, &draft)
                .await?;

            debug!(id = %created.id, "created student");
            Ok(created)
        })
    }

    fn update_student<'a>(
        &'a self,
        id: StudentId,
        draft: StudentDraft,
    ) -> ServiceFuture<'a, Student> {
        Box::pin(async move {
            let request = HttpRequest::put(self.student_url(id));
            let updated = self
                .send_with_draft(Operation::Update, Some(id), request, &draft)
                .await?;

            debug!(id = %updated.id, "updated student");
            Ok(updated)
        })
    }

    fn delete_student<'a>(&'a self, id: StudentId) -> ServiceFuture<'a, ()> {
        Box::pin(async move {
            let request = HttpRequest::delete(self.student_url(id));
            self.send(Operation::Delete, Some(id), request).await?;

            debug!(id = %id, "deleted student");
            Ok(())
        })
    }

    fn delete_all_students<'a>(&'a self, confirm: bool) -> ServiceFuture<'a, DeletionSummary> {
        Box::pin(async move {
            if !confirm {
                return Err(StudentError::unconfirmed_bulk_delete());
            }

            let request = HttpRequest::delete(self.config.endpoint(DELETE_ALL_PATH));
            let response = self.send(Operation::DeleteAll, None, request).await?;
            let summary = decode::<DeleteAllPayload>(Operation::DeleteAll, &response)
                .map(DeletionSummary::from)?;

            debug!(
                deleted = summary.deleted_count,
                remaining = summary.remaining_count,
                "deleted all students"
            );
            Ok(summary)
        })
    }
}

fn decode<T>(operation: Operation, response: &HttpResponse) -> Result<T, StudentError>
where
    T: DeserializeOwned,
{
    // A JSON `null` carries no record, same as a blank body.
    if !response.has_body() || response.body.trim() == "null" {
        return Err(StudentError::empty_response(operation, response.status));
    }

    serde_json::from_str(&response.body)
        .map_err(|error| StudentError::malformed_body(operation, response.status, error))
}
