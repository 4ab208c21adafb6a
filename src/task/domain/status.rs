//! Task lifecycle status and its transition rules.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task.
///
/// Serialized with upper snake case names (`IN_PROGRESS`); the PascalCase
/// variant names are accepted as aliases when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work on the task has not started.
    #[serde(alias = "Pending")]
    Pending,
    /// The task is being worked on.
    #[serde(alias = "InProgress")]
    InProgress,
    /// The task is finished. Terminal.
    #[serde(alias = "Completed")]
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns the human-readable description paired with the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "not yet started",
            Self::InProgress => "in progress",
            Self::Completed => "finished",
        }
    }

    /// Returns `true` when no further status change is permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns `true` when a task in this status may move to `target`.
    ///
    /// Any status other than [`TaskStatus::Completed`] may move to any
    /// status, including itself, so only the source status is consulted.
    #[must_use]
    pub const fn can_transition_to(self, _target: Self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" | "INPROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
