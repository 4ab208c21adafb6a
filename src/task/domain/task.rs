//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};

/// Fractional-second digits kept on task timestamps, matching `timestamptz`.
const TIMESTAMP_PRECISION: u16 = 6;
use serde::Serialize;

/// Task aggregate root.
///
/// Mutation goes through [`Task::update_details`] and
/// [`Task::change_status`], which keep the title non-blank, refuse status
/// changes once completed, and never move `updated_at` before `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task stamped with `now`.
    ///
    /// `now` is truncated to whole microseconds so that stored tasks compare
    /// equal to the ones that were saved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is blank.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, TaskDomainError> {
        let title = TaskTitle::new(title)?;
        let now = now.trunc_subsecs(TIMESTAMP_PRECISION);
        Ok(Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// Stored rows were validated when written, so the title is not checked
    /// again.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: TaskTitle::from_persisted(data.title),
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title and description.
    ///
    /// Status and creation time are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is blank; the
    /// task is not modified in that case.
    pub fn update_details(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        self.title = TaskTitle::new(title)?;
        self.description = description;
        self.touch(now);
        Ok(())
    }

    /// Moves the task to `status`.
    ///
    /// Moving to the current status is accepted and still refreshes
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] when the task is
    /// completed, whatever the target; the task is not modified in that case.
    pub fn change_status(
        &mut self,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(status) {
            return Err(TaskDomainError::AlreadyCompleted(self.id));
        }
        self.status = status;
        self.touch(now);
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.trunc_subsecs(TIMESTAMP_PRECISION).max(self.created_at);
    }
}
