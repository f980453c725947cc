//! Common test utilities and helpers
//!
//! Builds the full router against the in-memory store and a recording
//! mail dispatcher, so integration tests exercise the real HTTP surface
//! without external services.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::Mutex;

use contact_relay::mail::{MailDispatcher, MailError, OutboundEmail};
use contact_relay::routes::create_router;
use contact_relay::server::config::{ServerConfig, SmtpConfig};
use contact_relay::server::state::AppState;
use contact_relay::store::MemoryStore;

/// Mail dispatcher that records every message instead of sending it.
///
/// Can be switched into a failing mode to exercise the
/// persisted-but-not-relayed path.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    failing: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent dispatch fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything dispatched so far.
    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailDispatcher for RecordingMailer {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<String, MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::relay("relay rejected the message"));
        }
        let mut sent = self.sent.lock().await;
        sent.push(email.clone());
        Ok(format!("<test-{}@relay.test>", sent.len()))
    }
}

/// Receiver address used by the test configuration.
pub const TEST_RECEIVER: &str = "inbox@relay.test";

fn test_config(dev_mode: bool) -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused".to_string(),
        smtp: SmtpConfig {
            host: "smtp.relay.test".to_string(),
            username: "relay@relay.test".to_string(),
            password: "secret".to_string(),
        },
        receiver_email: TEST_RECEIVER.to_string(),
        port: 0,
        dev_mode,
    }
}

/// A running test server plus handles to its injected dependencies.
pub struct TestContext {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
}

/// Assemble the router with test dependencies.
pub fn spawn_app(dev_mode: bool) -> TestContext {
    let store = Arc::new(MemoryStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    let state = AppState::new(
        store.clone(),
        mailer.clone(),
        Arc::new(test_config(dev_mode)),
    );

    let server = TestServer::new(create_router(state)).expect("failed to start test server");

    TestContext {
        server,
        store,
        mailer,
    }
}
