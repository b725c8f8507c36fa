use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::S3Config;
use crate::error::AppError;

/// External object storage returning durable, publicly resolvable URLs
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `body` under `key` and return the hosted URL
    async fn upload(&self, key: &str, body: Vec<u8>, content_type: &str)
        -> Result<String, AppError>;
}

/// S3-backed object storage
pub struct S3Storage {
    client: Client,
    config: S3Config,
}

impl S3Storage {
    /// Build an S3 client from the provided configuration.
    pub async fn new(config: S3Config) -> Result<Self, AppError> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(key_id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                key_id,
                secret,
                None,
                None,
                "gallery-service",
            ));
        }

        let shared_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(endpoint) = &config.endpoint {
            if !endpoint.trim().is_empty() {
                builder = builder.endpoint_url(endpoint);
            }
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            config,
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| AppError::UploadError(format!("Failed to upload object: {e}")))?;

        Ok(self.config.public_url(key))
    }
}
