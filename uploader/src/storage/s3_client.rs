//! S3-compatible object storage client
//!
//! Uses AWS S3 by default; an endpoint override and path-style addressing
//! allow compatible services such as MinIO.

use std::path::Path;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use super::{ObjectStore, StorageError, StorageResult};

/// S3 client configuration. Unset fields fall back to the SDK's default
/// provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Config {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

/// `ObjectStore` backed by the AWS SDK
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default credential chain plus `config`
    pub async fn from_config(config: &S3Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(builder.build());
        info!(
            region = ?client.config().region(),
            endpoint = ?config.endpoint_url,
            "S3 client initialized"
        );

        Self::new(client)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, local_path: &Path, bucket: &str, key: &str) -> StorageResult<()> {
        debug!(source = %local_path.display(), bucket, key, "Uploading file to S3");

        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|source| StorageError::ReadSource {
                path: local_path.to_path_buf(),
                source,
            })?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::PutObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}
