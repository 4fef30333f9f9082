//! Domain model for task records.
//!
//! The task domain models the single managed entity, a to-do item with a
//! title, description, and calendar due date, while keeping storage and
//! HTTP concerns outside of the domain boundary. Parsing the submitted due
//! date string is a domain responsibility; everything else on a task is
//! carried through unvalidated, matching the deliberately thin behaviour of
//! the service.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{Task, TaskDraft};
