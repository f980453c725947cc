//! Contact Submission Module
//!
//! This module implements the one flow in the server with more than one
//! step: accept a contact-form payload, validate it, persist it, and relay
//! it by email.
//!
//! # Module Structure
//!
//! ```text
//! contact/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request/response types, submission model, validation
//! └── handlers.rs - The POST /api/send-email handler
//! ```

pub mod handlers;
pub mod types;

pub use handlers::send_email;
pub use types::{ContactRequest, ContactSubmission, SendEmailResponse};
