//! Shared application state injected into request handlers.

use std::sync::Arc;

use super::views::ViewEngine;
use crate::task::ports::TaskRepository;

/// State shared by every route handler.
///
/// Handlers talk to storage through the repository port, so the same router
/// serves the `SQLite` adapter in production and the in-memory adapter in
/// tests.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn TaskRepository>,
    views: ViewEngine,
}

impl AppState {
    /// Creates state from a repository and a view engine.
    #[must_use]
    pub const fn new(repository: Arc<dyn TaskRepository>, views: ViewEngine) -> Self {
        Self { repository, views }
    }

    /// Returns the task repository.
    #[must_use]
    pub fn repository(&self) -> &dyn TaskRepository {
        self.repository.as_ref()
    }

    /// Returns the view engine.
    #[must_use]
    pub const fn views(&self) -> &ViewEngine {
        &self.views
    }
}
