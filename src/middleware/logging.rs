//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request as it enters the handler chain and its resulting
/// status on the way out.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!("{} {} -> {}", method, path, response.status());
    response
}
