use thiserror::Error;

/// Errors produced by the record codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("failed to encode record: {0}")]
    Serialization(String),

    #[error("failed to decode record: {0}")]
    Deserialization(String),
}

/// Convenience alias for codec results.
pub type RecordResult<T> = Result<T, RecordError>;
