//! Catalog endpoint integration tests
//!
//! Covers list/lookup/create for the service and project collections,
//! including identifier validation happening before any store access.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::spawn_app;
use contact_relay::store::{Collection, DocumentStore};

#[tokio::test]
async fn empty_collections_list_as_empty_arrays() {
    let ctx = spawn_app(false);

    for path in ["/projects", "/service"] {
        let response = ctx.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "path: {path}");
        let body: Value = response.json();
        assert_eq!(body, json!([]), "path: {path}");
    }
}

#[tokio::test]
async fn listed_documents_keep_insertion_order_and_carry_ids() {
    let ctx = spawn_app(false);

    let first = ctx
        .store
        .insert_document(Collection::Projects, json!({"title": "Alpha"}))
        .await
        .unwrap();
    let second = ctx
        .store
        .insert_document(Collection::Projects, json!({"title": "Beta"}))
        .await
        .unwrap();

    let response = ctx.server.get("/projects").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let documents = body.as_array().expect("projects should be an array");
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["title"], json!("Alpha"));
    assert_eq!(documents[0]["id"], json!(first.inserted_id.to_string()));
    assert_eq!(documents[1]["title"], json!("Beta"));
    assert_eq!(documents[1]["id"], json!(second.inserted_id.to_string()));
}

#[tokio::test]
async fn malformed_identifier_is_rejected_before_lookup() {
    let ctx = spawn_app(false);

    let response = ctx.server.get("/project/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid project ID"));

    let response = ctx.server.get("/service/123").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Invalid service ID"));
}

#[tokio::test]
async fn valid_but_absent_identifier_is_404() {
    let ctx = spawn_app(false);

    let response = ctx.server.get(&format!("/project/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Project not found"));

    let response = ctx.server.get(&format!("/service/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Service not found"));
}

#[tokio::test]
async fn present_identifier_returns_the_stored_document() {
    let ctx = spawn_app(false);

    let ack = ctx
        .store
        .insert_document(
            Collection::Projects,
            json!({"title": "Gamma", "tags": ["web", "design"]}),
        )
        .await
        .unwrap();

    let response = ctx
        .server
        .get(&format!("/project/{}", ack.inserted_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["title"], json!("Gamma"));
    assert_eq!(body["tags"], json!(["web", "design"]));
    assert_eq!(body["id"], json!(ack.inserted_id.to_string()));
}

#[tokio::test]
async fn created_service_is_acknowledged_and_retrievable() {
    let ctx = spawn_app(false);

    let response = ctx
        .server
        .post("/service")
        .json(&json!({"title": "Audit", "price": 250}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let ack: Value = response.json();
    assert_eq!(ack["acknowledged"], json!(true));
    let inserted_id = ack["insertedId"].as_str().expect("insertedId should be a string");
    Uuid::parse_str(inserted_id).expect("insertedId should be a UUID");

    let response = ctx.server.get(&format!("/service/{inserted_id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["title"], json!("Audit"));
    assert_eq!(body["price"], json!(250));

    let response = ctx.server.get("/service").await;
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}
