//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /api/login: public (no auth required)
/// - /api/verify-token: protected (global require_auth middleware)
pub fn router() -> Router<ServerState> {
    Router::new()
        // Public route - no auth middleware applied
        .route("/api/login", post(handler::login))
        // Protected route - requires authentication
        .route("/api/verify-token", get(handler::verify_token))
}
