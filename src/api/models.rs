//! Request and response bodies for the task API.
//!
//! Request bodies are deserialized leniently (every field optional) and then
//! checked field by field so a single response can name every problem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, FieldErrors};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Body of `POST /api/v1/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    pub title: Option<String>,
    /// Optional task description.
    pub description: Option<String>,
}

impl CreateTaskBody {
    /// Checks the body and converts it into a service request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming every invalid field.
    pub fn validate(self) -> Result<CreateTaskRequest, ApiError> {
        let mut errors = FieldErrors::new();
        check_title(self.title.as_deref(), &mut errors);
        check_description(self.description.as_deref(), &mut errors);

        match self.title {
            Some(title) if errors.is_empty() => {
                let request = CreateTaskRequest::new(title);
                Ok(match self.description {
                    Some(description) => request.with_description(description),
                    None => request,
                })
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Body of `PUT /api/v1/tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description; absent clears it.
    pub description: Option<String>,
    /// Target status name.
    pub status: Option<String>,
}

impl UpdateTaskBody {
    /// Checks the body and converts it into a service request for `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming every invalid field.
    pub fn validate(self, task_id: TaskId) -> Result<UpdateTaskRequest, ApiError> {
        let mut errors = FieldErrors::new();
        check_title(self.title.as_deref(), &mut errors);
        check_description(self.description.as_deref(), &mut errors);
        let status = match self.status.as_deref() {
            None => {
                errors.insert("status".to_owned(), "task status is required".to_owned());
                None
            }
            Some(raw) => match TaskStatus::try_from(raw) {
                Ok(status) => Some(status),
                Err(err) => {
                    errors.insert("status".to_owned(), err.to_string());
                    None
                }
            },
        };

        match (self.title, status) {
            (Some(title), Some(status)) if errors.is_empty() => {
                let request = UpdateTaskRequest::new(task_id, title).with_status(status);
                Ok(match self.description {
                    Some(description) => request.with_description(description),
                    None => request,
                })
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Query string of `GET /api/v1/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTasksQuery {
    /// Optional status filter.
    pub status: Option<String>,
}

impl ListTasksQuery {
    /// Parses the status filter, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on field `status` for unknown names.
    pub fn status_filter(&self) -> Result<Option<TaskStatus>, ApiError> {
        self.status
            .as_deref()
            .map(|raw| {
                TaskStatus::try_from(raw)
                    .map_err(|err| ApiError::field("status", err.to_string()))
            })
            .transpose()
    }
}

/// Parses a task identifier taken from the request path.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on field `id` when the value is not a UUID.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::field("id", format!("invalid task id: {raw}")))
}

/// JSON representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description, `null` when absent.
    pub description: Option<String>,
    /// Current status.
    pub status: TaskStatus,
    /// Human-readable status description.
    pub status_description: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last modification.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            status_description: task.status().description().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `UP` when the service answers.
    pub status: String,
    /// Number of stored tasks.
    pub tasks: u64,
}

// PostgreSQL text columns cannot hold U+0000.
fn check_title(title: Option<&str>, errors: &mut FieldErrors) {
    match title {
        None => {
            errors.insert("title".to_owned(), "task title is required".to_owned());
        }
        Some(value) if value.trim().is_empty() => {
            errors.insert("title".to_owned(), "task title is required".to_owned());
        }
        Some(value) if value.chars().count() > TITLE_MAX_CHARS => {
            errors.insert(
                "title".to_owned(),
                format!("task title must be at most {TITLE_MAX_CHARS} characters"),
            );
        }
        Some(value) if value.contains('\0') => {
            errors.insert(
                "title".to_owned(),
                "task title must not contain NUL characters".to_owned(),
            );
        }
        Some(_) => {}
    }
}

fn check_description(description: Option<&str>, errors: &mut FieldErrors) {
    let Some(value) = description else {
        return;
    };
    if value.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(
            "description".to_owned(),
            format!("task description must be at most {DESCRIPTION_MAX_CHARS} characters"),
        );
    } else if value.contains('\0') {
        errors.insert(
            "description".to_owned(),
            "task description must not contain NUL characters".to_owned(),
        );
    }
}
