//! Middleware Module
//!
//! Request-processing middleware for the server. Currently provides:
//!
//! - **`logging`** - per-request method/path/status logging

pub mod logging;

pub use logging::log_requests;
