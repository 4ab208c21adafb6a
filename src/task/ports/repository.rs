//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task, or replaces the stored task with the same id.
    ///
    /// Returns the task as persisted.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task, oldest first.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every stored task in the given status, oldest first.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Reports whether a task with the identifier is stored.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Removes the task with the identifier. Removing a missing task is a
    /// no-op.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
