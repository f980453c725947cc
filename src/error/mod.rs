//! API Error Module
//!
//! This module defines the error taxonomy for the HTTP surface and the
//! single place where errors become responses.
//!
//! # Architecture
//!
//! - **`types`** - The `ApiError` taxonomy and status code mapping
//! - **`conversion`** - `IntoResponse` implementation and the last-resort
//!   panic handler
//!
//! # Design
//!
//! Handlers return `Result<_, ApiError>` and never write status codes or
//! failure bodies themselves. Every failure payload has the same shape:
//! `{ "success": false, "message": ... }`, with an `error` detail field
//! added only for dispatch failures in development mode.

pub mod conversion;
pub mod types;

pub use conversion::handle_panic;
pub use types::ApiError;
