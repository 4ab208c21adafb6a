//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned when a task domain rule is violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is missing or blank after trimming.
    #[error("task title is required")]
    EmptyTitle,

    /// A status change was attempted on a completed task.
    #[error("task is already completed: {0}")]
    AlreadyCompleted(TaskId),
}

/// Error returned while parsing task statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
