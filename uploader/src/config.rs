use std::env;
use std::path::PathBuf;

use crate::storage::S3Config;

pub const DEFAULT_SOURCE_FILE: &str = "sample.txt";
pub const DEFAULT_DESTINATION_KEYS: [&str; 2] = ["docs/sample.txt", "sample.txt"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub upload: UploadConfig,
    pub s3: S3Config,
}

/// What to upload and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub bucket: String,
    pub source_file: PathBuf,
    /// Written in this order.
    pub destination_keys: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// anything it does not return.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let destination_keys = match lookup("UPLOAD_DESTINATION_KEYS") {
            Some(raw) => parse_keys(&raw),
            None => defaults.upload.destination_keys,
        };

        let force_path_style = match lookup("S3_FORCE_PATH_STYLE") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue("S3_FORCE_PATH_STYLE", raw))?,
            None => defaults.s3.force_path_style,
        };

        Ok(Config {
            upload: UploadConfig {
                bucket: lookup("UPLOAD_BUCKET").unwrap_or(defaults.upload.bucket),
                source_file: lookup("UPLOAD_SOURCE_FILE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.upload.source_file),
                destination_keys,
            },
            s3: S3Config {
                region: lookup("AWS_REGION").filter(|r| !r.is_empty()),
                endpoint_url: lookup("S3_ENDPOINT_URL").filter(|u| !u.is_empty()),
                force_path_style,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.bucket.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("Bucket name must not be empty".to_string()));
        }

        if self.upload.source_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig("Source file must not be empty".to_string()));
        }

        if self.upload.destination_keys.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "At least one destination key is required".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upload: UploadConfig {
                bucket: shared::DEFAULT_BUCKET.to_string(),
                source_file: PathBuf::from(DEFAULT_SOURCE_FILE),
                destination_keys: DEFAULT_DESTINATION_KEYS.iter().map(|k| k.to_string()).collect(),
            },
            s3: S3Config::default(),
        }
    }
}

fn parse_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
