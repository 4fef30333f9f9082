//! Unit tests for the web layer.
//!
//! Tests are organised by concern: the HTTP error contract, then template
//! rendering through the view engine.
