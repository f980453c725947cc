//! Route Configuration Module
//!
//! This module assembles the HTTP surface of the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Main router creation and middleware stack
//! ├── api_routes.rs - /api endpoints
//! └── meta.rs       - Greeting, health, and fallback handlers
//! ```
//!
//! # Route Overview
//!
//! - `GET /` - plain text greeting
//! - `GET /projects`, `GET /project/{id}` - project collection
//! - `GET /service`, `POST /service`, `GET /service/{id}` - service
//!   collection
//! - `POST /api/send-email` - contact submission
//! - `GET /api/health` - health check
//! - anything else - generic 404 payload

pub mod api_routes;
pub mod meta;
pub mod router;

pub use router::create_router;
