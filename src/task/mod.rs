//! Task storage and domain model for Agendum.
//!
//! This module implements the data half of the service: task records with a
//! title, description, and due date, a repository contract for storing them,
//! and `SQLite` plus in-memory adapters behind it. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
