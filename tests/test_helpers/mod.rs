//! Shared HTTP helpers for router-level integration tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::Value;
use std::sync::Arc;
use tasklist::{
    api::{AppState, create_router},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskService},
};
use tower::ServiceExt;

/// Builds the API router over a fresh in-memory repository.
pub fn in_memory_router() -> Router {
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    create_router(AppState::new(service))
}

/// Sends a request with an optional JSON body and decodes the JSON reply.
///
/// Empty replies decode to [`Value::Null`].
///
/// # Errors
///
/// Returns an error when the request cannot be built or the reply is not
/// valid JSON.
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> eyre::Result<(StatusCode, Value)> {
    match body {
        Some(json) => {
            let raw = serde_json::to_string(json)?;
            send_raw(router, method, uri, Some("application/json"), raw).await
        }
        None => send_raw(router, method, uri, None, String::new()).await,
    }
}

/// Sends a request with a raw body and optional content type.
///
/// # Errors
///
/// Returns an error when the request cannot be built or the reply is not
/// valid JSON.
pub async fn send_raw(
    router: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> eyre::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }
    let request = builder.body(Body::from(body))?;

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}
