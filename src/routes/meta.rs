//! Greeting, health, and fallback handlers.
//!
//! None of these touch the store or the mail relay.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::error::ApiError;

/// Plain text greeting at the root path.
pub async fn greeting() -> &'static str {
    "Hello World!"
}

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// Report the server as alive with the current timestamp.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Email & document store server is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Generic 404 for unmatched routes and unmatched methods.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
