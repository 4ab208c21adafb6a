//! Service layer for task creation, lookup, update, and deletion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for updating an existing task.
///
/// Title and description are always replaced; the status is only changed
/// when one is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the title of `task_id` and clearing its
    /// description.
    #[must_use]
    pub fn new(task_id: TaskId, title: impl Into<String>) -> Self {
        Self {
            task_id,
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the target status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The referenced task does not exist.
    #[error("task not found with id: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Timestamps come from the injected clock; a single instant is captured per
/// operation.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest { title, description } = request;
        let task = Task::new(title, description, self.clock.utc())?;
        tracing::info!(task_id = %task.id(), "creating task");
        Ok(self.repository.save(&task).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the identifier
    /// or [`TaskServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Returns all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn find_all(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Returns all tasks in the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn find_by_status(&self, status: TaskStatus) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Replaces the details of a task and optionally changes its status.
    ///
    /// Nothing is written when any step fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Domain`] when the title is blank or the task is
    /// already completed and a status is given, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let UpdateTaskRequest {
            task_id,
            title,
            description,
            status,
        } = request;
        tracing::info!(task_id = %task_id, "updating task");

        let mut task = self.find_by_id(task_id).await?;
        let now = self.clock.utc();
        task.update_details(title, description, now)?;
        if let Some(target) = status {
            task.change_status(target, now)?;
        }
        Ok(self.repository.save(&task).await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        tracing::info!(task_id = %id, "deleting task");
        if !self.repository.exists_by_id(id).await? {
            return Err(TaskServiceError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the count fails.
    pub async fn count(&self) -> TaskServiceResult<u64> {
        Ok(self.repository.count().await?)
    }
}
