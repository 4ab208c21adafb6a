//! Shared test helpers for `PostgreSQL` integration tests.

use std::env;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Duration, TimeZone, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tasklist::task::adapters::postgres::{CREATE_TASKS_SQL, PostgresTaskRepository, build_pool};

static SCHEMA_READY: OnceLock<Mutex<bool>> = OnceLock::new();

/// Returns the configured database URL, if any.
pub fn database_url() -> Option<String> {
    env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Creates the `tasks` table once per test binary.
fn ensure_schema(url: &str) -> eyre::Result<()> {
    let lock = SCHEMA_READY.get_or_init(|| Mutex::new(false));
    let mut ready = lock
        .lock()
        .map_err(|err| eyre::eyre!("schema lock poisoned: {err}"))?;
    if !*ready {
        let mut connection = PgConnection::establish(url)?;
        connection.batch_execute(CREATE_TASKS_SQL)?;
        *ready = true;
    }
    Ok(())
}

/// Connects a repository to the database named by `DATABASE_URL`.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset or the database is
/// unreachable.
pub async fn repository() -> eyre::Result<PostgresTaskRepository> {
    let url = database_url()
        .ok_or_else(|| eyre::eyre!("DATABASE_URL must name a PostgreSQL database"))?;

    let pool = tokio::task::spawn_blocking(move || {
        ensure_schema(&url)?;
        Ok::<_, eyre::Report>(build_pool(&url, 2)?)
    })
    .await??;
    Ok(PostgresTaskRepository::new(pool))
}

/// Returns the instant `minutes` after 2026-04-01T08:00:00Z.
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0)
        .single()
        .unwrap_or_default()
        + Duration::minutes(minutes)
}
