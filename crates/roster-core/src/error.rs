use thiserror::Error;

/// Validation and contract errors exposed by `roster-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("student name cannot be empty")]
    EmptyName,
    #[error("student age must be a whole number: '{value}'")]
    InvalidAge { value: String },
    #[error("no student is selected")]
    NoSelection,

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Configuration errors raised while assembling a [`crate::ClientConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api key is missing; set ROSTER_API_KEY or pass --api-key")]
    MissingApiKey,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be a positive number of seconds: '{value}'")]
    InvalidTimeout { value: String },
    #[error("http transport could not be initialised: {message}")]
    Transport { message: String },
}
