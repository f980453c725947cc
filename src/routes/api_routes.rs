/**
 * API Route Handlers
 *
 * This module wires up the /api endpoints:
 *
 * - `POST /api/send-email` - contact submission (validate, persist, relay)
 * - `GET /api/health` - health check, no store or mail dependency
 */

use axum::Router;

use crate::contact::handlers::send_email;
use crate::routes::meta::health;
use crate::server::state::AppState;

/// Configure the /api routes.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/send-email", axum::routing::post(send_email))
        .route("/api/health", axum::routing::get(health))
}
