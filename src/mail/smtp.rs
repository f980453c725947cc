/**
 * SMTP Mail Dispatcher
 *
 * This module implements the mail dispatch seam over an authenticated
 * SMTP relay using lettre's async transport.
 *
 * # Transport Lifecycle
 *
 * The transport is built once at startup from the relay host and account
 * credentials and shared for the process lifetime. Connectivity can be
 * probed at startup with `verify`; a failed probe is worth logging but
 * does not prevent the server from starting, since the relay may come
 * back before the first submission arrives.
 *
 * # Message Identifiers
 *
 * Each dispatched message carries an explicit generated Message-ID so the
 * caller can report it back to the client without depending on what the
 * relay assigns internally.
 */

use async_trait::async_trait;
use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use crate::mail::{MailDispatcher, MailError, OutboundEmail};
use crate::server::config::SmtpConfig;

/// Mail dispatcher backed by an authenticated SMTP relay.
pub struct SmtpDispatcher {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpDispatcher {
    /// Build the relay transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay host cannot be resolved into a
    /// transport configuration.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            host: config.host.clone(),
        })
    }

    /// Probe relay connectivity.
    ///
    /// Returns `Ok(true)` when the relay accepted a test connection.
    pub async fn verify(&self) -> Result<bool, MailError> {
        Ok(self.transport.test_connection().await?)
    }
}

#[async_trait]
impl MailDispatcher for SmtpDispatcher {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<String, MailError> {
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.host);

        let message = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .to(email.to.parse::<Mailbox>()?)
            .reply_to(email.reply_to.parse::<Mailbox>()?)
            .subject(email.subject.clone())
            .message_id(Some(message_id.clone()))
            .body(email.body.clone())?;

        self.transport.send(message).await?;
        tracing::debug!(%message_id, "email handed to relay");

        Ok(message_id)
    }
}
