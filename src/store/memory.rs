//! In-memory document store (for development/testing).

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::contact::types::ContactSubmission;
use crate::store::{attach_id, Collection, DocumentStore, InsertAck, StoreError};

/// Document store holding everything in process memory.
///
/// Behaves like the PostgreSQL implementation from the handlers' point of
/// view: UUID identifiers assigned at insert, insertion-ordered listings,
/// identifiers injected into documents on read.
#[derive(Default)]
pub struct MemoryStore {
    submissions: RwLock<Vec<(Uuid, ContactSubmission)>>,
    collections: RwLock<HashMap<Collection, Vec<(Uuid, Value)>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all persisted contact submissions, in insertion order.
    pub async fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions
            .read()
            .await
            .iter()
            .map(|(_, submission)| submission.clone())
            .collect()
    }

    /// Number of persisted contact submissions.
    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_submission(&self, submission: &ContactSubmission) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.submissions.write().await.push((id, submission.clone()));
        Ok(id)
    }

    async fn list_documents(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(&collection)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(id, document)| attach_id(*id, document.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn find_document(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        let document = collections.get(&collection).and_then(|entries| {
            entries
                .iter()
                .find(|(entry_id, _)| *entry_id == id)
                .map(|(entry_id, document)| attach_id(*entry_id, document.clone()))
        });
        Ok(document)
    }

    async fn insert_document(
        &self,
        collection: Collection,
        document: Value,
    ) -> Result<InsertAck, StoreError> {
        let id = Uuid::new_v4();
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push((id, document));
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn stores_submissions_in_order() {
        let store = MemoryStore::new();
        store.insert_submission(&submission()).await.unwrap();
        store.insert_submission(&submission()).await.unwrap();
        assert_eq!(store.submission_count().await, 2);
    }

    #[tokio::test]
    async fn lists_documents_in_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert_document(Collection::Projects, json!({"n": 1}))
            .await
            .unwrap();
        store
            .insert_document(Collection::Projects, json!({"n": 2}))
            .await
            .unwrap();

        let documents = store.list_documents(Collection::Projects).await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["n"], json!(1));
        assert_eq!(documents[1]["n"], json!(2));
    }

    #[tokio::test]
    async fn finds_document_by_id_with_identifier_injected() {
        let store = MemoryStore::new();
        let ack = store
            .insert_document(Collection::Services, json!({"title": "Audit"}))
            .await
            .unwrap();

        let document = store
            .find_document(Collection::Services, ack.inserted_id)
            .await
            .unwrap()
            .expect("document should exist");
        assert_eq!(document["title"], json!("Audit"));
        assert_eq!(document["id"], json!(ack.inserted_id.to_string()));

        let absent = store
            .find_document(Collection::Services, Uuid::new_v4())
            .await
            .unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = MemoryStore::new();
        store
            .insert_document(Collection::Services, json!({"title": "Audit"}))
            .await
            .unwrap();

        let projects = store.list_documents(Collection::Projects).await.unwrap();
        assert!(projects.is_empty());
    }
}
