//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain construction and parsing behaviour,
//! then repository behaviour against the in-memory adapter.
