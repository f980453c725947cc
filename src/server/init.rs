/**
 * Server Initialization
 *
 * This module is the composition root: it owns the startup sequence and
 * hands the assembled router back to `main`.
 *
 * # Initialization Process
 *
 * 1. Connect to the document store and run the schema bootstrap. A
 *    missing or unreachable database fails startup; every route except
 *    the greeting and the health check depends on it.
 * 2. Build the SMTP transport and probe relay connectivity. A failed
 *    probe is logged but does not prevent startup, since the relay may
 *    recover before the first submission arrives.
 * 3. Assemble the application state and create the router.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::mail::{MailError, SmtpDispatcher};
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::store::{PgDocumentStore, StoreError};

/// Errors that abort server startup.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("store initialization failed: {0}")]
    Store(#[from] StoreError),
    #[error("mail transport initialization failed: {0}")]
    Mail(#[from] MailError),
}

/// Create and configure the Axum application.
///
/// # Errors
///
/// Returns an error if the document store cannot be reached or the mail
/// transport cannot be built.
pub async fn create_app(config: ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing contact relay server");

    let store = PgDocumentStore::connect(&config.database_url).await?;
    tracing::info!("Connected to document store");

    let mailer = SmtpDispatcher::from_config(&config.smtp)?;
    match mailer.verify().await {
        Ok(true) => tracing::info!("Mail relay is ready to send messages"),
        Ok(false) => tracing::warn!("Mail relay refused the test connection"),
        Err(e) => tracing::warn!("Mail relay verification failed: {e}"),
    }

    let state = AppState::new(Arc::new(store), Arc::new(mailer), Arc::new(config));

    Ok(create_router(state))
}
