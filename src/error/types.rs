/**
 * API Error Types
 *
 * This module defines the error taxonomy used by all HTTP handlers.
 * Each variant maps to exactly one status code; the mapping lives in
 * `status_code` and nowhere else.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input, rejected before any side
 *   effect (400)
 * - `InvalidIdentifier` - a lookup key that is not a well-formed document
 *   identifier, rejected before any store access (400)
 * - `NotFound` - a well-formed identifier with no matching document (404)
 * - `Dispatch` - a store or mail failure after validation passed (500)
 *
 * Dispatch errors optionally carry the underlying error detail; the
 * handler only fills it in when the server runs in development mode, so
 * production clients never see internals.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors a handler can return to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Lookup key is not a well-formed document identifier.
    #[error("invalid identifier: {message}")]
    InvalidIdentifier { message: String },

    /// No document matches the identifier.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Store or mail failure after validation passed.
    #[error("dispatch error: {message}")]
    Dispatch {
        message: String,
        /// Underlying error detail, echoed to clients only in development.
        detail: Option<String>,
    },
}

impl ApiError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a dispatch error with no detail.
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::Dispatch {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach underlying detail to a dispatch error.
    ///
    /// Has no effect on other variants.
    pub fn with_detail(mut self, new_detail: impl Into<String>) -> Self {
        if let Self::Dispatch { ref mut detail, .. } = self {
            *detail = Some(new_detail.into());
        }
        self
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Dispatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing message for this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::InvalidIdentifier { message }
            | Self::NotFound { message }
            | Self::Dispatch { message, .. } => message,
        }
    }
}
