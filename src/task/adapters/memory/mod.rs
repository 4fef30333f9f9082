//! In-memory adapter implementations for task storage ports.

mod task;

pub use task::InMemoryTaskRepository;
