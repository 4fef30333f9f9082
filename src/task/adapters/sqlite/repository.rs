//! `SQLite` repository implementation for task storage.

use super::{
    models::{TaskContentRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

/// SQL applying the task table schema.
const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-08-10-000000_create_tasks/up.sql");

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// `SQLite`-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    /// Applies the task table schema when it is not already present.
    ///
    /// The statement is idempotent, so the server runs this on every start
    /// and a fresh database file ends up with the schema while an existing
    /// one is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the schema cannot
    /// be applied.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = to_content_row(draft);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn find(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let changes = to_content_row(draft);
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(&changes)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_content_row(draft: &TaskDraft) -> TaskContentRow {
    TaskContentRow {
        title: draft.title().to_owned(),
        description: draft.description().to_owned(),
        due_date: draft.due_date(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    Task::from_parts(TaskId::new(row.id), row.title, row.description, row.due_date)
}
