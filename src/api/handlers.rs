//! Request handlers for the task API.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use mockable::Clock;

use super::{
    error::ApiResult,
    models::{
        CreateTaskBody, HealthResponse, ListTasksQuery, TaskResponse, UpdateTaskBody,
        parse_task_id,
    },
    routes::AppState,
};
use crate::task::ports::TaskRepository;

/// Creates a task.
///
/// POST /api/v1/tasks
///
/// # Errors
///
/// Returns a validation error for malformed bodies and an internal error when
/// persistence fails.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let request = body.validate()?;
    let task = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// Lists tasks, optionally filtered by status.
///
/// GET /api/v1/tasks
///
/// # Errors
///
/// Returns a validation error for unknown status filters and an internal
/// error when lookup fails.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    params: Result<Query<ListTasksQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = params?;
    let tasks = match query.status_filter()? {
        Some(status) => state.service.find_by_status(status).await?,
        None => state.service.find_all().await?,
    };
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// Fetches a task.
///
/// GET /api/v1/tasks/{id}
///
/// # Errors
///
/// Returns not found when the task does not exist.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let task = state.service.find_by_id(task_id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// Replaces a task's details and status.
///
/// PUT /api/v1/tasks/{id}
///
/// # Errors
///
/// Returns a validation error for malformed bodies, not found when the task
/// does not exist, and bad request when the task is already completed.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let Json(body) = payload?;
    let request = body.validate(task_id)?;
    let task = state.service.update(request).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// Deletes a task.
///
/// DELETE /api/v1/tasks/{id}
///
/// # Errors
///
/// Returns not found when the task does not exist.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    state.service.delete(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reports liveness and the stored task count.
///
/// GET /health
///
/// # Errors
///
/// Returns an internal error when the repository cannot be reached.
pub async fn health<R, C>(State(state): State<AppState<R, C>>) -> ApiResult<Json<HealthResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.service.count().await?;
    Ok(Json(HealthResponse {
        status: "UP".to_owned(),
        tasks,
    }))
}
