//! Domain model for task management.
//!
//! The task domain owns title validation and the status state machine while
//! keeping persistence and transport concerns outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
