//! Router configuration for the task API.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::task::{ports::TaskRepository, services::TaskService};

/// Shared state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task service backing the API.
    pub service: Arc<TaskService<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task service.
    #[must_use]
    pub fn new(service: TaskService<R, C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Creates the API router.
///
/// # Routes
///
/// - `GET /health`
/// - `POST /api/v1/tasks`
/// - `GET /api/v1/tasks`
/// - `GET /api/v1/tasks/{id}`
/// - `PUT /api/v1/tasks/{id}`
/// - `DELETE /api/v1/tasks/{id}`
pub fn create_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health::<R, C>))
        .route(
            "/api/v1/tasks",
            post(handlers::create_task::<R, C>).get(handlers::list_tasks::<R, C>),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
