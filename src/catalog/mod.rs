//! Catalog Module
//!
//! List, lookup, and create handlers for the service and project
//! collections. Every handler is a thin pass-through to the document
//! store; no fields of the stored documents are interpreted.

pub mod handlers;

pub use handlers::{create_service, get_project, get_service, list_projects, list_services};
