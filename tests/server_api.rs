//! Greeting, health, and fallback integration tests

mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn root_returns_plain_text_greeting() {
    let ctx = spawn_app(false);

    let response = ctx.server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Hello World!");
}

#[tokio::test]
async fn health_reports_ok_with_current_timestamp() {
    let ctx = spawn_app(false);

    let response = ctx.server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], json!("OK"));
    assert!(body["message"].as_str().unwrap().contains("running"));

    let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
    DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be RFC 3339");
}

#[tokio::test]
async fn unknown_path_yields_generic_404_payload() {
    let ctx = spawn_app(false);

    for path in ["/nope", "/api/unknown", "/service/1/extra"] {
        let response = ctx.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "path: {path}");

        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Endpoint not found"));
    }
}

#[tokio::test]
async fn unmatched_method_on_known_path_yields_the_same_404() {
    let ctx = spawn_app(false);

    let response = ctx.server.delete("/projects").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Endpoint not found"));

    let response = ctx.server.put("/api/health").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
