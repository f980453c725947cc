//! Document Store Module
//!
//! This module defines the persistence seam for the server. All documents
//! live in named collections inside an external store; handlers talk to the
//! store exclusively through the [`DocumentStore`] trait so the production
//! PostgreSQL implementation and the in-memory implementation used in
//! development and tests are interchangeable.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - DocumentStore trait, Collection, InsertAck, StoreError
//! ├── postgres.rs - PostgreSQL-backed implementation
//! └── memory.rs   - In-memory implementation (development/testing)
//! ```
//!
//! # Collections
//!
//! Contact submissions are typed rows with a fixed shape. The `services`
//! and `projects` collections hold opaque JSON documents that the server
//! stores and returns without interpreting any fields.
//!
//! # Identifiers
//!
//! Every document is keyed by a UUID generated by the store at insert time.
//! Documents read back from the opaque collections carry their identifier
//! injected as an `id` field.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::contact::types::ContactSubmission;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// The opaque document collections exposed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Service listings, writable through the API.
    Services,
    /// Project listings, read-only through the API.
    Projects,
}

impl Collection {
    /// Table backing this collection.
    pub fn table(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Projects => "projects",
        }
    }

    /// Singular noun for user-facing messages.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Services => "service",
            Self::Projects => "project",
        }
    }

    /// Capitalized singular noun for user-facing messages.
    pub fn title(self) -> &'static str {
        match self {
            Self::Services => "Service",
            Self::Projects => "Project",
        }
    }
}

/// Acknowledgment returned by document inserts.
///
/// Mirrors the store's insert acknowledgment: whether the write was
/// accepted and the identifier generated for the new document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema bootstrap failed at startup.
    #[error("schema bootstrap failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Persistence seam for all handlers.
///
/// Implementations must be safe for concurrent use; the server shares one
/// instance across all requests for the process lifetime.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a contact submission and return its generated identifier.
    async fn insert_submission(&self, submission: &ContactSubmission) -> Result<Uuid, StoreError>;

    /// All documents in a collection, in insertion order.
    async fn list_documents(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    /// A single document by identifier, or `None` if absent.
    async fn find_document(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Value>, StoreError>;

    /// Insert an opaque document verbatim and return the acknowledgment.
    async fn insert_document(
        &self,
        collection: Collection,
        document: Value,
    ) -> Result<InsertAck, StoreError>;
}

/// Inject the store identifier into a document read back from an opaque
/// collection. Non-object documents are returned unchanged.
pub(crate) fn attach_id(id: Uuid, mut document: Value) -> Value {
    if let Value::Object(ref mut fields) = document {
        fields.insert("id".to_string(), Value::String(id.to_string()));
    }
    document
}
