//! S3 notification event payload

use serde::Deserialize;
use serde_json::Value;

/// Event delivered by Lambda when objects change in the bucket.
///
/// Records are kept as raw JSON so that each one is decoded on its own,
/// in order, as it is processed.
#[derive(Debug, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "Records")]
    pub records: Vec<Value>,
}

/// One notification entry. Only `s3.object.key` is required.
#[derive(Debug, Deserialize)]
pub struct NotificationRecord {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: Option<S3Bucket>,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
    #[serde(default)]
    pub size: Option<u64>,
}

impl NotificationRecord {
    pub fn object_key(&self) -> &str {
        &self.s3.object.key
    }

    pub fn bucket_name(&self) -> Option<&str> {
        self.s3.bucket.as_ref().map(|b| b.name.as_str())
    }
}
