//! Upload Routes
//!
//! Issues pre-signed S3 upload URLs to authenticated users.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Build upload router - authentication required (global middleware)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/s3-url", post(handler::create_upload_url))
}
