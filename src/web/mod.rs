//! HTTP delivery layer for Agendum.
//!
//! The web module owns everything between a socket and the task repository
//! port: the route table, request handlers, HTML view rendering, the error
//! contract, and server lifecycle. Handlers depend only on [`AppState`], so
//! the router is equally servable over `SQLite` in production and the
//! in-memory adapter in tests.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

pub use error::WebError;
pub use router::build_router;
pub use server::serve;
pub use state::AppState;
pub use views::ViewEngine;

#[cfg(test)]
mod tests;
