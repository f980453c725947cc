//! Mail Dispatch Module
//!
//! This module owns everything related to relaying contact submissions by
//! email. Handlers compose an [`OutboundEmail`] and hand it to a
//! [`MailDispatcher`]; the production implementation speaks SMTP through
//! lettre, and tests substitute a recording implementation.
//!
//! # Module Structure
//!
//! ```text
//! mail/
//! ├── mod.rs  - MailDispatcher trait, OutboundEmail, MailError
//! └── smtp.rs - SMTP transport implementation
//! ```
//!
//! # Delivery Semantics
//!
//! Dispatch is best-effort and at-most-once. There is no retry, no delivery
//! confirmation, and no queueing; a failed send is reported to the caller
//! and otherwise forgotten.

use async_trait::async_trait;
use thiserror::Error;

use crate::contact::types::ContactSubmission;

pub mod smtp;

pub use smtp::SmtpDispatcher;

/// A composed message ready for the relay.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// Sender mailbox as rendered on the wire.
    pub from: String,
    /// Recipient mailbox.
    pub to: String,
    /// Reply-To mailbox.
    pub reply_to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl OutboundEmail {
    /// Compose the notification email for a contact submission.
    ///
    /// The subject is copied verbatim and the reply target is the
    /// submitter's own address, so replying in a mail client reaches the
    /// person who filled in the form. The From mailbox pairs the
    /// submitter's display name with the fixed receiver address; see
    /// DESIGN.md before changing that.
    pub fn contact_notification(submission: &ContactSubmission, receiver: &str) -> Self {
        let body = format!(
            "New contact form submission\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Subject: {subject}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             Received: {received}\n",
            name = submission.name,
            email = submission.email,
            subject = submission.subject,
            message = submission.message,
            received = submission.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );

        Self {
            from: format!("{} <{}>", submission.name, receiver),
            to: receiver.to_string(),
            reply_to: submission.email.clone(),
            subject: submission.subject.clone(),
            body,
        }
    }
}

/// Errors surfaced by mail dispatch.
#[derive(Debug, Error)]
pub enum MailError {
    /// A mailbox string did not parse as an address.
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("could not assemble message: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP transport failed.
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The relay reported a failure outside the transport layer.
    #[error("mail relay error: {message}")]
    Relay { message: String },
}

impl MailError {
    /// Create a relay error with a message.
    pub fn relay(message: impl Into<String>) -> Self {
        Self::Relay {
            message: message.into(),
        }
    }
}

/// Outbound mail seam for handlers.
///
/// `dispatch` performs exactly one delivery attempt and returns the
/// message identifier the relay was given.
#[async_trait]
pub trait MailDispatcher: Send + Sync {
    /// Hand a composed message to the relay.
    async fn dispatch(&self, email: &OutboundEmail) -> Result<String, MailError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Quote request".to_string(),
            message: "Please get in touch.".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 8, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn notification_pairs_display_name_with_receiver_address() {
        let email = OutboundEmail::contact_notification(&submission(), "inbox@agency.com");
        assert_eq!(email.from, "Ada Lovelace <inbox@agency.com>");
        assert_eq!(email.to, "inbox@agency.com");
    }

    #[test]
    fn notification_replies_to_submitter() {
        let email = OutboundEmail::contact_notification(&submission(), "inbox@agency.com");
        assert_eq!(email.reply_to, "ada@example.com");
        assert_eq!(email.subject, "Quote request");
    }

    #[test]
    fn notification_body_embeds_all_fields_and_timestamp() {
        let email = OutboundEmail::contact_notification(&submission(), "inbox@agency.com");
        assert!(email.body.contains("Name: Ada Lovelace"));
        assert!(email.body.contains("Email: ada@example.com"));
        assert!(email.body.contains("Subject: Quote request"));
        assert!(email.body.contains("Please get in touch."));
        assert!(email.body.contains("Received: 2026-08-08 12:30:00 UTC"));
    }
}
