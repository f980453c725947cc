/**
 * Contact Submission Handler
 *
 * This module implements POST /api/send-email.
 *
 * # Flow
 *
 * 1. Validate the payload (presence of all four fields, email shape)
 * 2. Persist the submission with a server-generated timestamp
 * 3. Compose the notification email and dispatch it through the relay
 * 4. Return the relay's message identifier
 *
 * # Failure Semantics
 *
 * Validation failures happen before any side effect and return 400.
 * Store and mail failures after that point return a generic 500; the
 * ordering is fixed (persist before send), and a persisted submission
 * whose email failed to send stays persisted. The underlying error
 * detail is echoed to the client only in development mode.
 */

use axum::{extract::State, Json};
use std::fmt::Display;

use crate::contact::types::{ContactRequest, ContactSubmission, SendEmailResponse};
use crate::error::ApiError;
use crate::mail::OutboundEmail;
use crate::server::state::AppState;

/// Handle a contact-form submission.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or malformed email address
/// * `500 Internal Server Error` - the store write or the mail dispatch
///   failed after validation passed
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    request.validate()?;

    let submission = ContactSubmission::new(request);

    let id = state.store.insert_submission(&submission).await.map_err(|e| {
        tracing::error!("Failed to persist contact submission: {e}");
        dispatch_error(&state, &e)
    })?;
    tracing::info!("Saved contact submission {id}");

    let email = OutboundEmail::contact_notification(&submission, &state.config.receiver_email);
    let message_id = state.mailer.dispatch(&email).await.map_err(|e| {
        tracing::error!("Failed to dispatch contact email: {e}");
        dispatch_error(&state, &e)
    })?;

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email sent and saved to database successfully!".to_string(),
        message_id,
    }))
}

/// Generic dispatch failure, with the cause echoed only in development.
fn dispatch_error(state: &AppState, cause: &impl Display) -> ApiError {
    let error = ApiError::dispatch("Failed to send email. Please try again later.");
    if state.config.dev_mode {
        error.with_detail(cause.to_string())
    } else {
        error
    }
}
