//! API error types and HTTP response conversion.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{
    domain::{TaskDomainError, TaskId},
    services::TaskServiceError,
};

/// Per-field validation messages keyed by request field name.
pub type FieldErrors = BTreeMap<String, String>;

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

const VALIDATION_ERROR: &str = "Validation Failed";
const VALIDATION_MESSAGE: &str = "validation error";
const INTERNAL_MESSAGE: &str = "internal server error";

/// Body returned for every failure except request validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// HTTP reason phrase.
    pub error: String,
    /// Human-readable failure description.
    pub message: String,
    /// Time the failure was reported.
    pub timestamp: DateTime<Utc>,
}

/// Body returned when request validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Error category, always `Validation Failed`.
    pub error: String,
    /// Summary message.
    pub message: String,
    /// Per-field validation messages.
    pub errors: FieldErrors,
    /// Time the failure was reported.
    pub timestamp: DateTime<Utc>,
}

/// Failure raised while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or missing required fields.
    #[error("validation error: {0:?}")]
    Validation(FieldErrors),

    /// A task domain rule was violated.
    #[error(transparent)]
    InvalidTask(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found with id: {0}")]
    NotFound(TaskId),

    /// Any other failure. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a validation error for a single field.
    #[must_use]
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), message.into());
        Self::Validation(errors)
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidTask(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::InvalidTask(domain),
            TaskServiceError::NotFound(id) => Self::NotFound(id),
            TaskServiceError::Repository(repository) => Self::Internal(repository.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::field("body", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::field("query", rejection.body_text())
    }
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Error").to_owned()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let timestamp = Utc::now();

        match self {
            Self::Validation(errors) => {
                tracing::debug!(?errors, "request validation failed");
                let body = ValidationErrorResponse {
                    status: status.as_u16(),
                    error: VALIDATION_ERROR.to_owned(),
                    message: VALIDATION_MESSAGE.to_owned(),
                    errors,
                    timestamp,
                };
                (status, Json(body)).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                let body = ErrorResponse {
                    status: status.as_u16(),
                    error: reason(status),
                    message: INTERNAL_MESSAGE.to_owned(),
                    timestamp,
                };
                (status, Json(body)).into_response()
            }
            other => {
                let body = ErrorResponse {
                    status: status.as_u16(),
                    error: reason(status),
                    message: other.to_string(),
                    timestamp,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
