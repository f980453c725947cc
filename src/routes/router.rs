/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations and the middleware stack into a single Axum
 * router.
 *
 * # Middleware Stack
 *
 * From the outside in:
 *
 * 1. Panic catcher - renders a generic 500 payload for anything a
 *    handler failed to handle itself
 * 2. Permissive CORS - the API is meant to be called from any origin
 * 3. Request logging - method, path, and resulting status per request
 *
 * # Fallbacks
 *
 * Unmatched paths and unmatched methods on known paths both fall through
 * to the same generic 404 handler, so the HTTP surface has exactly one
 * not-found shape.
 */

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::catalog::handlers::{
    create_service, get_project, get_service, list_projects, list_services,
};
use crate::error::handle_panic;
use crate::middleware::log_requests;
use crate::routes::api_routes::configure_api_routes;
use crate::routes::meta::{greeting, route_not_found};
use crate::server::state::AppState;

/// Create the Axum router with all routes and middleware configured.
///
/// # Arguments
///
/// * `state` - Assembled application state (store, mailer, configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", axum::routing::get(greeting))
        .route("/projects", axum::routing::get(list_projects))
        .route("/project/{id}", axum::routing::get(get_project))
        .route(
            "/service",
            axum::routing::get(list_services).post(create_service),
        )
        .route("/service/{id}", axum::routing::get(get_service));

    let router = configure_api_routes(router);

    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
