mod config;
mod error;
mod job;
mod storage;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::job::UploadJob;
use crate::storage::S3ObjectStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    shared::observability::init_default_logging("uploader")?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;
    info!(
        bucket = %config.upload.bucket,
        source = %config.upload.source_file.display(),
        keys = ?config.upload.destination_keys,
        "Configuration loaded"
    );

    let store = S3ObjectStore::from_config(&config.s3).await;

    let report = UploadJob::from(&config.upload).run(&store).await?;
    info!(bucket = %report.bucket, uploaded = report.keys.len(), "Upload complete");

    Ok(())
}
