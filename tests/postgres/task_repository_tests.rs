//! `PostgreSQL` integration tests for task storage and lookup.

use chrono::Duration;
use eyre::ensure;
use tasklist::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

use crate::postgres::helpers::{at_minute, repository};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn save_and_find_round_trip() -> eyre::Result<()> {
    let repo = repository().await?;
    let task = Task::new("Persist me", Some("with details".to_owned()), at_minute(0))?;

    let saved = repo.save(&task).await?;
    let found = repo.find_by_id(task.id()).await?;

    ensure!(saved == task);
    ensure!(found == Some(task));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn sub_second_timestamps_survive_a_round_trip() -> eyre::Result<()> {
    let repo = repository().await?;
    let mut task = Task::new(
        "Precise",
        None,
        at_minute(0) + Duration::nanoseconds(123_456_789),
    )?;
    task.change_status(
        TaskStatus::InProgress,
        at_minute(1) + Duration::nanoseconds(987_654_321),
    )?;

    repo.save(&task).await?;
    let found = repo.find_by_id(task.id()).await?;

    ensure!(found.as_ref() == Some(&task), "stored {found:?}, saved {task:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn save_existing_task_updates_row_but_keeps_created_at() -> eyre::Result<()> {
    let repo = repository().await?;
    let original = Task::new("Original", None, at_minute(0))?;
    repo.save(&original).await?;

    let rewritten = Task::from_persisted(PersistedTaskData {
        id: original.id(),
        title: "Rewritten".to_owned(),
        description: Some("second write".to_owned()),
        status: TaskStatus::InProgress,
        created_at: at_minute(30),
        updated_at: at_minute(45),
    });
    let saved = repo.save(&rewritten).await?;

    ensure!(saved.title() == "Rewritten");
    ensure!(saved.description() == Some("second write"));
    ensure!(saved.status() == TaskStatus::InProgress);
    ensure!(saved.created_at() == at_minute(0));
    ensure!(saved.updated_at() == at_minute(45));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn find_all_and_find_by_status_order_by_creation() -> eyre::Result<()> {
    let repo = repository().await?;
    let early = Task::new("Early", None, at_minute(1))?;
    let mut late = Task::new("Late", None, at_minute(2))?;
    late.change_status(TaskStatus::Completed, at_minute(3))?;
    repo.save(&late).await?;
    repo.save(&early).await?;
    let mine = [early.id(), late.id()];

    let all: Vec<TaskId> = repo
        .find_all()
        .await?
        .iter()
        .map(Task::id)
        .filter(|id| mine.contains(id))
        .collect();
    let completed = repo.find_by_status(TaskStatus::Completed).await?;

    ensure!(all == mine);
    ensure!(completed.iter().any(|task| task.id() == late.id()));
    ensure!(completed.iter().all(|task| task.status() == TaskStatus::Completed));
    ensure!(repo.count().await? >= 2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn delete_removes_row() -> eyre::Result<()> {
    let repo = repository().await?;
    let task = Task::new("Delete me", None, at_minute(0))?;
    repo.save(&task).await?;
    ensure!(repo.exists_by_id(task.id()).await?);

    repo.delete_by_id(task.id()).await?;

    ensure!(!repo.exists_by_id(task.id()).await?);
    ensure!(repo.find_by_id(task.id()).await?.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn database_rejects_blank_titles() -> eyre::Result<()> {
    let repo = repository().await?;
    let blank = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "   ".to_owned(),
        description: None,
        status: TaskStatus::Pending,
        created_at: at_minute(0),
        updated_at: at_minute(0),
    });

    let result = repo.save(&blank).await;

    ensure!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a PostgreSQL server named by DATABASE_URL"]
async fn apply_schema_is_idempotent() -> eyre::Result<()> {
    let repo = repository().await?;

    repo.apply_schema().await?;
    repo.apply_schema().await?;
    Ok(())
}
