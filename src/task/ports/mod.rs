//! Port contracts for task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the web layer.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
