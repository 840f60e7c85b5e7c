//! Shared utilities for the S3 file manager units

// Re-export common dependencies
pub use anyhow;
pub use thiserror;
pub use tracing;

pub mod observability;

/// Bucket the uploader writes to and the notifier is subscribed to.
pub const DEFAULT_BUCKET: &str = "my-s3-file-manager-atulkamble";
