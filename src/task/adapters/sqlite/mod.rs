//! `SQLite` adapters for task persistence.

mod bootstrap;
mod models;
mod repository;
mod schema;

pub use bootstrap::build_pool;
pub use repository::{SqliteTaskRepository, TaskSqlitePool};
