use std::path::PathBuf;

use tracing::info;

use crate::config::UploadConfig;
use crate::error::{UploaderError, UploaderResult};
use crate::storage::ObjectStore;

/// Uploads one local file to a bucket under each destination key
#[derive(Debug, Clone)]
pub struct UploadJob {
    bucket: String,
    source: PathBuf,
    destination_keys: Vec<String>,
}

/// Objects written by a completed run, in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub bucket: String,
    pub keys: Vec<String>,
}

impl UploadJob {
    pub fn new(bucket: impl Into<String>, source: impl Into<PathBuf>, destination_keys: Vec<String>) -> Self {
        Self {
            bucket: bucket.into(),
            source: source.into(),
            destination_keys,
        }
    }

    /// Issue one upload per destination key, sequentially.
    ///
    /// The first failure aborts the run; remaining keys are not attempted.
    pub async fn run<S>(&self, store: &S) -> UploaderResult<UploadReport>
    where
        S: ObjectStore + ?Sized,
    {
        if self.destination_keys.is_empty() {
            return Err(UploaderError::NoDestinations);
        }

        let mut report = UploadReport {
            bucket: self.bucket.clone(),
            keys: Vec::with_capacity(self.destination_keys.len()),
        };

        for key in &self.destination_keys {
            store
                .put_object(&self.source, &self.bucket, key)
                .await
                .map_err(|source| UploaderError::Upload {
                    key: key.clone(),
                    source,
                })?;

            info!(
                source = %self.source.display(),
                bucket = %self.bucket,
                key = %key,
                "File uploaded"
            );
            report.keys.push(key.clone());
        }

        Ok(report)
    }
}

impl From<&UploadConfig> for UploadJob {
    fn from(config: &UploadConfig) -> Self {
        Self::new(
            config.bucket.clone(),
            config.source_file.clone(),
            config.destination_keys.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::{MockObjectStore, StorageError};
    use mockall::Sequence;
    use std::path::Path;

    fn expect_upload(store: &mut MockObjectStore, seq: &mut Sequence, expected_key: &'static str) {
        store
            .expect_put_object()
            .withf(move |path, bucket, key| {
                path == Path::new("sample.txt")
                    && bucket == "my-s3-file-manager-atulkamble"
                    && key == expected_key
            })
            .times(1)
            .in_sequence(seq)
            .returning(|_, _, _| Ok(()));
    }

    #[tokio::test]
    async fn test_default_plan_uploads_twice_in_order() {
        let mut store = MockObjectStore::new();
        let mut seq = Sequence::new();
        expect_upload(&mut store, &mut seq, "docs/sample.txt");
        expect_upload(&mut store, &mut seq, "sample.txt");

        let job = UploadJob::from(&Config::default().upload);
        let report = job.run(&store).await.unwrap();

        assert_eq!(
            report,
            UploadReport {
                bucket: "my-s3-file-manager-atulkamble".to_string(),
                keys: vec!["docs/sample.txt".to_string(), "sample.txt".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_first_failure_stops_the_run() {
        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(|_, _, key| key == "docs/sample.txt")
            .times(1)
            .returning(|_, bucket, key| {
                Err(StorageError::PutObject {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    message: "AccessDenied".to_string(),
                })
            });
        store
            .expect_put_object()
            .withf(|_, _, key| key == "sample.txt")
            .never();

        let job = UploadJob::from(&Config::default().upload);
        let err = job.run(&store).await.unwrap_err();

        match err {
            UploaderError::Upload { key, source } => {
                assert_eq!(key, "docs/sample.txt");
                assert!(source.to_string().contains("AccessDenied"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_plan_issues_no_calls() {
        let mut store = MockObjectStore::new();
        store.expect_put_object().never();

        let job = UploadJob::new("bucket", "sample.txt", Vec::new());
        assert!(matches!(job.run(&store).await, Err(UploaderError::NoDestinations)));
    }
}
