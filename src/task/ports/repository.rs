//! Repository port for task persistence, lookup, and removal.

use crate::task::domain::{Task, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations allocate identifiers themselves, so callers hand over
/// drafts and receive the stored record back with its identifier filled in.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the persisted record.
    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task in store order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces the content of an existing task and returns the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Removes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
