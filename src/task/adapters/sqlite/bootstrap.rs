//! `SQLite` pool construction for task storage.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

use super::repository::TaskSqlitePool;
use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};

/// How long a connection waits on a locked database before returning busy,
/// in milliseconds.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Applies per-connection pragmas as the pool hands connections out.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a `SQLite` connection pool for the database at `database_path`.
///
/// `SQLite` creates the database file on first connection when it does not
/// already exist. Pooled connections wait on a locked database for up to
/// five seconds before surfacing a busy error.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
/// built, for example when the path is not writable.
pub fn build_pool(database_path: &str) -> TaskRepositoryResult<TaskSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_path);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}
