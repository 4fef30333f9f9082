//! Agendum: a small web-based task manager.
//!
//! This crate provides task record keeping over `SQLite` together with the
//! HTML form and listing pages used to create, inspect, update, and delete
//! those records.
//!
//! # Architecture
//!
//! The crate is split along a hexagonal seam: task records and their
//! validation live in a domain layer with no knowledge of storage or HTTP,
//! persistence is reached through a repository port with `SQLite` and
//! in-memory adapters behind it, and the web layer renders the routes on
//! top of that port. The server binary wires the three together at startup.
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and repository adapters
//! - [`web`]: HTTP routes, templates, and error responses

pub mod task;
pub mod web;
