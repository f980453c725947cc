//! Catalog HTTP handlers.
//!
//! Lookups validate the identifier before touching the store: a malformed
//! identifier is a 400 regardless of what the collection contains, a
//! well-formed identifier with no match is a 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::store::{Collection, DocumentStore, InsertAck};

/// List all project documents.
pub async fn list_projects(
    State(store): State<Arc<dyn DocumentStore>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_collection(&store, Collection::Projects).await
}

/// Fetch a single project by identifier.
pub async fn get_project(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    fetch_document(&store, Collection::Projects, &id).await
}

/// List all service documents.
pub async fn list_services(
    State(store): State<Arc<dyn DocumentStore>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_collection(&store, Collection::Services).await
}

/// Insert a service document verbatim.
pub async fn create_service(
    State(store): State<Arc<dyn DocumentStore>>,
    Json(document): Json<Value>,
) -> Result<Json<InsertAck>, ApiError> {
    let ack = store
        .insert_document(Collection::Services, document)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert service document: {e}");
            ApiError::dispatch("Failed to create service")
        })?;
    Ok(Json(ack))
}

/// Fetch a single service by identifier.
pub async fn get_service(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    fetch_document(&store, Collection::Services, &id).await
}

async fn list_collection(
    store: &Arc<dyn DocumentStore>,
    collection: Collection,
) -> Result<Json<Vec<Value>>, ApiError> {
    let documents = store.list_documents(collection).await.map_err(|e| {
        tracing::error!("Failed to list {}: {e}", collection.table());
        ApiError::dispatch(format!("Failed to fetch {}", collection.table()))
    })?;
    Ok(Json(documents))
}

async fn fetch_document(
    store: &Arc<dyn DocumentStore>,
    collection: Collection,
    raw_id: &str,
) -> Result<Json<Value>, ApiError> {
    // Reject malformed identifiers before any store access.
    let id = Uuid::parse_str(raw_id).map_err(|_| {
        ApiError::invalid_identifier(format!("Invalid {} ID", collection.singular()))
    })?;

    let document = store.find_document(collection, id).await.map_err(|e| {
        tracing::error!("Failed to fetch {} {id}: {e}", collection.singular());
        ApiError::dispatch(format!("Failed to fetch {}", collection.singular()))
    })?;

    document
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("{} not found", collection.title())))
}
