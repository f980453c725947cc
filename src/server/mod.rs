//! Server Module
//!
//! Configuration loading, application state, and initialization for the
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration loading
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Composition root (store, mailer, router assembly)
//! ```

pub mod config;
pub mod init;
pub mod state;

pub use config::{ConfigError, ServerConfig, SmtpConfig};
pub use init::create_app;
pub use state::AppState;
