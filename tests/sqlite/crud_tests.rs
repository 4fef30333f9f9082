//! CRUD tests for the `SQLite` task repository over a real database file.

use agendum::task::domain::{TaskDraft, TaskId};
use agendum::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::NaiveDate;
use rstest::rstest;

use crate::sqlite::helpers::{BoxError, SqliteTestContext, context, draft};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_identifiers(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;

    let first = ctx
        .repository
        .create(&draft("First"))
        .await
        .expect("create should succeed");
    let second = ctx
        .repository
        .create(&draft("Second"))
        .await
        .expect("create should succeed");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_round_trips_stored_content(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    let due_date = NaiveDate::from_ymd_opt(2026, 12, 24).expect("valid calendar date");
    let created = ctx
        .repository
        .create(&TaskDraft::new("Wrap presents", "Before the evening", due_date))
        .await
        .expect("create should succeed");

    let found = ctx
        .repository
        .find(created.id())
        .await
        .expect("find should succeed")
        .expect("task should exist");

    assert_eq!(found.title(), "Wrap presents");
    assert_eq!(found.description(), "Before the evening");
    assert_eq!(found.due_date(), due_date);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_returns_none_for_missing_task(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;

    let found = ctx
        .repository
        .find(TaskId::new(42))
        .await
        .expect("find should succeed");

    assert!(found.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_creation_order(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    for title in ["First", "Second", "Third"] {
        ctx.repository
            .create(&draft(title))
            .await
            .expect("create should succeed");
    }

    let tasks = ctx.repository.list().await.expect("list should succeed");

    let titles: Vec<&str> = tasks.iter().map(agendum::task::domain::Task::title).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rewrites_content_and_keeps_identifier(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    let created = ctx
        .repository
        .create(&draft("Draft title"))
        .await
        .expect("create should succeed");
    let revised_due = NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid calendar date");

    let updated = ctx
        .repository
        .update(
            created.id(),
            &TaskDraft::new("Final title", "Reviewed", revised_due),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.title(), "Final title");

    let found = ctx
        .repository
        .find(created.id())
        .await
        .expect("find should succeed")
        .expect("task should exist");
    assert_eq!(found.description(), "Reviewed");
    assert_eq!(found.due_date(), revised_due);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_not_found(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;

    let result = ctx.repository.update(TaskId::new(99), &draft("Ghost")).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(99)
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    let created = ctx
        .repository
        .create(&draft("Short lived"))
        .await
        .expect("create should succeed");

    ctx.repository
        .delete(created.id())
        .await
        .expect("delete should succeed");

    let found = ctx
        .repository
        .find(created.id())
        .await
        .expect("find should succeed");
    assert!(found.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_reports_not_found(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;

    let result = ctx.repository.delete(TaskId::new(7)).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(7)
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_delete(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    let first = ctx
        .repository
        .create(&draft("First"))
        .await
        .expect("create should succeed");
    ctx.repository
        .delete(first.id())
        .await
        .expect("delete should succeed");

    let second = ctx
        .repository
        .create(&draft("Second"))
        .await
        .expect("create should succeed");

    assert_eq!(second.id(), TaskId::new(2));
    Ok(())
}
