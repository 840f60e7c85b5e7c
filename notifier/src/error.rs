use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Record {index} has no s3.object.key: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write to log sink: {0}")]
    Sink(#[from] std::io::Error),
}

pub type NotifierResult<T> = Result<T, NotifierError>;
