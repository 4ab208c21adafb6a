//! In-memory integration tests for task lifecycle operations.

use eyre::ensure;
use rstest::rstest;
use tasklist::task::{
    domain::{TaskDomainError, TaskStatus},
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

use super::helpers::{TestService, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_moves_from_pending_to_completed(service: TestService) -> eyre::Result<()> {
    let created = service
        .create(CreateTaskRequest::new("Buy milk").with_description("two litres"))
        .await?;
    ensure!(created.status() == TaskStatus::Pending);
    ensure!(created.created_at() == created.updated_at());

    let started = service
        .update(
            UpdateTaskRequest::new(created.id(), "Buy milk")
                .with_description("two litres")
                .with_status(TaskStatus::InProgress),
        )
        .await?;
    ensure!(started.status() == TaskStatus::InProgress);
    ensure!(started.updated_at() >= created.updated_at());

    let finished = service
        .update(UpdateTaskRequest::new(created.id(), "Buy milk").with_status(TaskStatus::Completed))
        .await?;
    ensure!(finished.status() == TaskStatus::Completed);
    ensure!(finished.description().is_none());
    ensure!(finished.created_at() == created.created_at());

    let stored = service.find_by_id(created.id()).await?;
    ensure!(stored == finished);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_cannot_be_reopened(service: TestService) -> eyre::Result<()> {
    let created = service.create(CreateTaskRequest::new("Ship it")).await?;
    service
        .update(UpdateTaskRequest::new(created.id(), "Ship it").with_status(TaskStatus::Completed))
        .await?;

    let result = service
        .update(UpdateTaskRequest::new(created.id(), "Ship it").with_status(TaskStatus::Pending))
        .await;

    ensure!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::AlreadyCompleted(id))) if id == created.id()
    ));
    ensure!(service.find_by_id(created.id()).await?.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_details_can_still_change(service: TestService) -> eyre::Result<()> {
    let created = service.create(CreateTaskRequest::new("Report")).await?;
    service
        .update(UpdateTaskRequest::new(created.id(), "Report").with_status(TaskStatus::Completed))
        .await?;

    let renamed = service
        .update(UpdateTaskRequest::new(created.id(), "Final report"))
        .await?;

    ensure!(renamed.title() == "Final report");
    ensure!(renamed.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone(service: TestService) -> eyre::Result<()> {
    let created = service.create(CreateTaskRequest::new("Temporary")).await?;

    service.delete(created.id()).await?;

    ensure!(matches!(
        service.find_by_id(created.id()).await,
        Err(TaskServiceError::NotFound(_))
    ));
    ensure!(matches!(
        service.delete(created.id()).await,
        Err(TaskServiceError::NotFound(_))
    ));
    ensure!(service.count().await? == 0);
    Ok(())
}
