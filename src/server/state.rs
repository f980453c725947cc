/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, assembled once by the
 * composition root and cloned into every handler. It holds the document
 * store, the mail dispatcher, and the parsed configuration, all behind
 * `Arc` so a clone is cheap.
 *
 * The store and the mailer are trait objects. Handlers that only need
 * the store extract `Arc<dyn DocumentStore>` directly through `FromRef`;
 * the contact handler takes the whole state because it needs the store,
 * the mailer, and the configured receiver address together.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::mail::MailDispatcher;
use crate::server::config::ServerConfig;
use crate::store::DocumentStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store, shared for the process lifetime.
    pub store: Arc<dyn DocumentStore>,
    /// Mail dispatcher, shared for the process lifetime.
    pub mailer: Arc<dyn MailDispatcher>,
    /// Parsed configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble the state from its injected dependencies.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        mailer: Arc<dyn MailDispatcher>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }
}

impl FromRef<AppState> for Arc<dyn DocumentStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn MailDispatcher> {
    fn from_ref(state: &AppState) -> Self {
        state.mailer.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
