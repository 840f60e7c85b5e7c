use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum UploaderError {
    #[error("No destination keys to upload to")]
    NoDestinations,

    #[error("Upload to {key} failed: {source}")]
    Upload {
        key: String,
        #[source]
        source: StorageError,
    },
}

pub type UploaderResult<T> = Result<T, UploaderError>;
