//! Object storage service
//!
//! Pre-signs S3 PUT URLs so clients upload employee photos straight to the
//! bucket; the server never proxies file bytes.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::core::Config;
use crate::utils::{AppError, ErrorCode};

/// Lifetime of a pre-signed upload URL
const UPLOAD_URL_TTL_SECS: u64 = 60;

/// S3 service - client plus the bucket uploads land in
#[derive(Debug, Clone)]
pub struct S3Service {
    pub client: S3Client,
    pub bucket: String,
}

impl S3Service {
    /// Build the client from the ambient AWS configuration, pinning the
    /// region to the bucket's region
    pub async fn new(config: &Config) -> Self {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let aws_config = aws_config
            .to_builder()
            .region(Region::new(config.s3_region.clone()))
            .build();

        Self {
            client: S3Client::new(&aws_config),
            bucket: config.s3_bucket.clone(),
        }
    }

    /// Generate a pre-signed PUT URL for `key` with the given content type.
    ///
    /// The upload succeeds only if the client sends the same Content-Type
    /// it requested the URL for.
    pub async fn presign_put(&self, key: &str, content_type: &str) -> Result<String, AppError> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(UPLOAD_URL_TTL_SECS))
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create presigning config");
                AppError::new(ErrorCode::FileStorageFailed)
            })?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "Failed to generate presigned URL");
                AppError::new(ErrorCode::FileStorageFailed)
            })?;

        Ok(presigned.uri().to_string())
    }
}
