//! Tasklist: a small task-management HTTP service.
//!
//! Tasks carry a title, an optional description, and a status that moves
//! between pending, in progress, and completed. Completed is terminal.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task entity, status state machine, repository, and service
//! - [`api`]: REST endpoints under `/api/v1/tasks`
//! - [`config`]: Layered CLI, environment, and file configuration
//! - [`server`]: Storage selection and HTTP serving
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
