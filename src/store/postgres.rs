//! PostgreSQL-backed document store.
//!
//! Collections are tables: contact submissions as typed rows, services and
//! projects as JSONB payloads keyed by UUID. The pool is created once at
//! startup and shared for the process lifetime.

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use async_trait::async_trait;
use serde_json::Value;

use crate::contact::types::ContactSubmission;
use crate::store::{attach_id, Collection, DocumentStore, InsertAck, StoreError};

/// Document store backed by a PostgreSQL connection pool.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connect to the database and run the schema bootstrap.
    ///
    /// The bootstrap only creates the collection tables if they do not
    /// exist yet, so it is safe to run on every startup.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_submission(&self, submission: &ContactSubmission) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO contact_submissions (id, name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.subject)
        .bind(&submission.message)
        .bind(submission.created_at)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_documents(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let query = format!(
            "SELECT id, document FROM {} ORDER BY created_at, id",
            collection.table()
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| attach_id(row.get("id"), row.get("document")))
            .collect())
    }

    async fn find_document(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Value>, StoreError> {
        let query = format!("SELECT id, document FROM {} WHERE id = $1", collection.table());

        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.map(|row| attach_id(row.get("id"), row.get("document"))))
    }

    async fn insert_document(
        &self,
        collection: Collection,
        document: Value,
    ) -> Result<InsertAck, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let query = format!(
            "INSERT INTO {} (id, document, created_at) VALUES ($1, $2, $3)",
            collection.table()
        );

        sqlx::query(&query)
            .bind(id)
            .bind(&document)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id,
        })
    }
}
