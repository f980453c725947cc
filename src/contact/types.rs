/**
 * Contact Submission Types
 *
 * Request payload, validation, the persisted submission model, and the
 * success response for the contact endpoint.
 *
 * # Validation
 *
 * All four fields are required and must be non-empty; a field missing
 * from the payload deserializes to an empty string and fails the same
 * check. The email address must match a permissive shape: a run of
 * characters that are neither whitespace nor `@`, an `@`, another such
 * run, a `.`, and a final such run. Nothing stricter is attempted.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Incoming contact-form payload.
///
/// Absent fields default to empty strings so that missing and empty
/// fields are rejected by the same validation path.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// Validate the payload before any side effect.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any field is empty or the email
    /// address is malformed.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(ApiError::validation(
                "All fields are required (name, email, subject, message)",
            ));
        }

        if !is_valid_email(&self.email) {
            return Err(ApiError::validation("Invalid email address"));
        }

        Ok(())
    }
}

/// Check an email address against the permissive `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    [local, host, tld].iter().all(|part| {
        !part.is_empty() && part.chars().all(|c| !c.is_whitespace() && c != '@')
    })
}

/// A contact submission as persisted in the document store.
///
/// The identifier is assigned by the store on insert; submissions are
/// never updated or deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Build a submission from a validated request with a server-generated
    /// creation timestamp.
    pub fn new(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            created_at: Utc::now(),
        }
    }
}

/// Success response for the contact endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
}
