//! REST API layer for the tasklist service.
//!
//! Exposes the task service under `/api/v1/tasks`:
//! - `POST /api/v1/tasks` creates a task
//! - `GET /api/v1/tasks` lists tasks, optionally filtered by `?status=`
//! - `GET|PUT|DELETE /api/v1/tasks/{id}` reads, updates, or deletes a task
//! - `GET /health` reports liveness and the stored task count
//!
//! Request bodies are validated here before reaching the service; service
//! failures are mapped to status codes by [`ApiError`].

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse, FieldErrors, ValidationErrorResponse};
pub use routes::{AppState, create_router};
