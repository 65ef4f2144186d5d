//! Upload URL Handler
//!
//! Validates the announced photo and hands out a short-lived pre-signed
//! PUT URL; file bytes go straight from the client to S3.

use axum::{Json, extract::State};
use uuid::Uuid;

use shared::client::{UploadUrlRequest, UploadUrlResponse};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Extensions accepted for employee photos
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Validate an announced upload, returning the normalized extension
fn validate_upload(filename: &str, content_type: &str) -> Result<String, AppError> {
    if filename.is_empty() {
        return Err(AppError::new(ErrorCode::NoFilename));
    }

    // Security check: prevent path traversal
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(AppError::validation("Invalid filename"));
    }

    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::with_message(
            ErrorCode::InvalidFileExtension,
            format!(
                "Invalid file extension '{}'. Supported: {}",
                ext,
                SUPPORTED_EXTENSIONS.join(", ")
            ),
        ));
    }

    // Declared content type must match what the extension implies
    let expected = mime_guess::from_ext(&ext).first_or_octet_stream();
    if content_type != expected.essence_str() {
        return Err(AppError::with_message(
            ErrorCode::UnsupportedFileFormat,
            format!("Content type '{content_type}' does not match extension '{ext}'"),
        ));
    }

    Ok(ext)
}

/// POST /api/s3-url - issue a pre-signed upload URL
pub async fn create_upload_url(
    State(state): State<ServerState>,
    Json(req): Json<UploadUrlRequest>,
) -> AppResult<ApiResponse<UploadUrlResponse>> {
    let ext = validate_upload(&req.filename, &req.content_type)?;

    // Object keys never reuse the client filename
    let key = format!("{}.{}", Uuid::new_v4(), ext);
    let url = state.s3.presign_put(&key, &req.content_type).await?;

    tracing::info!(key = %key, "Issued pre-signed upload URL");

    Ok(ApiResponse::success(UploadUrlResponse { url, key }))
}
