/// Object storage for the uploader
///
/// This module provides:
/// - The `ObjectStore` seam the upload job writes through
/// - An S3-compatible implementation backed by the AWS SDK

pub mod s3_client;

pub use s3_client::{S3Config, S3ObjectStore};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: ByteStreamError,
    },

    #[error("PutObject s3://{bucket}/{key} failed: {message}")]
    PutObject {
        bucket: String,
        key: String,
        message: String,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Destination for uploaded files
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the contents of `local_path` in `bucket` under `key`,
    /// creating or overwriting the object.
    async fn put_object(&self, local_path: &Path, bucket: &str, key: &str) -> StorageResult<()>;
}
