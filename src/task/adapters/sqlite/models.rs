//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-allocated task identifier.
    pub id: i32,
    /// Short task title.
    pub title: String,
    /// Free-text task description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
}

/// Insert and update model for task records.
///
/// The identifier column is absent so inserts let `SQLite` allocate it and
/// updates leave it untouched.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskContentRow {
    /// Short task title.
    pub title: String,
    /// Free-text task description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
}
