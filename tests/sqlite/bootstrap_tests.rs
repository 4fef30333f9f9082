//! Schema bootstrap tests for the `SQLite` task repository.

use agendum::task::ports::TaskRepository;
use rstest::rstest;

use crate::sqlite::helpers::{BoxError, SqliteTestContext, context, draft, open_repository};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ensure_schema_creates_tasks_table(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;

    let tasks = ctx.repository.list().await.expect("list should succeed");

    assert!(tasks.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ensure_schema_leaves_existing_rows_untouched(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    let created = ctx
        .repository
        .create(&draft("Survives reruns"))
        .await
        .expect("create should succeed");

    ctx.repository
        .ensure_schema()
        .await
        .expect("second schema run should succeed");

    let found = ctx
        .repository
        .find(created.id())
        .await
        .expect("find should succeed")
        .expect("task should survive a schema rerun");
    assert_eq!(found.title(), "Survives reruns");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_persist_across_pools(
    #[future] context: Result<SqliteTestContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = context.await?;
    let created = ctx
        .repository
        .create(&draft("Stored on disk"))
        .await
        .expect("create should succeed");

    let reopened = open_repository(&ctx.database_path).await?;

    let found = reopened
        .find(created.id())
        .await
        .expect("find should succeed")
        .expect("task should be visible through a new pool");
    assert_eq!(found.id(), created.id());
    assert_eq!(found.title(), "Stored on disk");
    Ok(())
}
