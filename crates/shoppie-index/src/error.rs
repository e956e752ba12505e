use thiserror::Error;

/// Errors from index load/save operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The index entry exists but its bytes do not decode as a JSON array
    /// of strings. Absence is not corruption — an absent entry loads as the
    /// empty index.
    #[error("corrupt index at key {key}: {reason}")]
    Corrupt { key: String, reason: String },

    /// The world-state backend failed.
    #[error("state error: {0}")]
    State(#[from] shoppie_state::StateError),
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
