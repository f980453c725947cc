//! Contact Relay - Main Library
//!
//! A small backend that accepts contact-form submissions over HTTP,
//! persists them to a document store, relays them by email, and exposes
//! read-only endpoints for the service and project collections.
//!
//! # Overview
//!
//! The server is a sequence of request handlers. Most perform a single
//! store operation; the contact endpoint is the one multi-step flow
//! (validate, persist, relay). Both external dependencies sit behind
//! traits so the router can be assembled with real or test
//! implementations.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, composition root
//! - **`routes`** - Router assembly, /api endpoints, meta handlers
//! - **`contact`** - Contact submission types, validation, handler
//! - **`catalog`** - Service/project list, lookup, and create handlers
//! - **`store`** - Document store seam (PostgreSQL and in-memory)
//! - **`mail`** - Mail dispatch seam (SMTP relay)
//! - **`error`** - Error taxonomy and centralized response mapping
//! - **`middleware`** - Request logging
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>` and the `IntoResponse`
//! implementation on `ApiError` is the single place failure payloads are
//! rendered. Validation happens before any side effect; store and mail
//! failures after that point become generic dispatch errors with detail
//! suppressed outside development mode.

/// Catalog (service/project) handlers
pub mod catalog;

/// Contact submission flow
pub mod contact;

/// API error taxonomy and response mapping
pub mod error;

/// Mail dispatch
pub mod mail;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Document store
pub mod store;

// Re-export commonly used types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
pub use store::{DocumentStore, MemoryStore, PgDocumentStore};
