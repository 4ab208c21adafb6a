//! HTTP server wiring: storage selection, middleware, and graceful shutdown.

use std::{io, sync::Arc};

use axum::{Router, http::HeaderValue};
use mockable::DefaultClock;
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    api::{AppState, create_router},
    config::AppConfig,
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, build_pool},
        },
        ports::{TaskRepository, TaskRepositoryError},
        services::TaskService,
    },
};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),

    /// The storage backend could not be prepared.
    #[error("storage initialisation failed: {0}")]
    Storage(#[from] TaskRepositoryError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was attempted.
        addr: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Builds the CORS layer for the configured origins.
///
/// An empty list allows any origin.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] when an origin is not a valid
/// header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(allowed))
}

/// Builds the application router over `repository` using the system clock.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] when a CORS origin is invalid.
pub fn build_app<R>(repository: R, cors_origins: &[String]) -> Result<Router, ServerError>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let router = create_router(AppState::new(service));
    Ok(router.layer(cors_layer(cors_origins)?))
}

/// Runs the server until a shutdown signal arrives.
///
/// Tasks are stored in `PostgreSQL` when a database URL is configured and in
/// memory otherwise.
///
/// # Errors
///
/// Returns [`ServerError`] when storage cannot be prepared, the address
/// cannot be bound, or serving fails.
pub async fn run(config: &AppConfig) -> Result<(), ServerError> {
    let router = match config.database_url.as_deref() {
        Some(url) => {
            tracing::info!(pool_size = config.pool_size, "using PostgreSQL task storage");
            let repository = PostgresTaskRepository::new(build_pool(url, config.pool_size)?);
            repository.apply_schema().await?;
            build_app(repository, &config.cors_origins)?
        }
        None => {
            tracing::info!("using in-memory task storage");
            build_app(InMemoryTaskRepository::new(), &config.cors_origins)?
        }
    };

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    tracing::info!(addr = %config.bind_addr, "tasklist server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
