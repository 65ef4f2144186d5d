//! API route module
//!
//! # Structure
//!
//! - [`auth`] - login and token verification
//! - [`health`] - liveness probe
//! - [`employees`] - employee management endpoints
//! - [`upload`] - pre-signed photo upload URLs

pub mod auth;
pub mod employees;
pub mod health;
pub mod upload;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// HTTP request access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(employees::router())
        .merge(upload::router())
}

/// Build the application: routes, auth middleware and HTTP layers
pub fn build_app(state: ServerState) -> Router {
    use tower::limit::ConcurrencyLimitLayer;

    // At most 100 requests in flight; excess requests queue
    let concurrency_limit = ConcurrencyLimitLayer::new(100);

    build_router()
        // JWT auth middleware at router level; require_auth skips public routes.
        // from_fn_with_state so the middleware can reach ServerState.
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(concurrency_limit)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}
