/**
 * Error Conversion
 *
 * This module renders errors into HTTP responses. It is the only place
 * that writes failure payloads, so every error a client sees has the
 * same shape:
 *
 * ```json
 * { "success": false, "message": "..." }
 * ```
 *
 * Dispatch errors in development mode additionally carry an `error`
 * field with the underlying detail.
 *
 * # Panics
 *
 * `handle_panic` is the last-resort handler installed at the top of the
 * middleware stack. A panicking handler produces a generic 500 payload;
 * the panic message is logged server-side and never reaches the client.
 */

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = json!({
            "success": false,
            "message": self.message(),
        });
        if let ApiError::Dispatch {
            detail: Some(detail),
            ..
        } = &self
        {
            body["error"] = Value::String(detail.clone());
        }

        (status, Json(body)).into_response()
    }
}

/// Render a caught panic as a generic 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("request handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Internal server error",
        })),
    )
        .into_response()
}
