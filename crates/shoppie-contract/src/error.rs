use shoppie_state::StateError;
use thiserror::Error;

/// Failures surfaced to the host caller.
///
/// Message registers are deliberately uneven — `ReadFailed` renders the
/// original's JSON error payload while the rest are plain text — to stay
/// observably compatible with the contract this one replaces. No variant is
/// retried anywhere; the only tolerated condition is an absent index, which
/// loads as empty and never reaches this enum.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Wrong number of positional arguments for the requested operation.
    #[error("Incorrect number of arguments. Expecting {expected}, got {got}")]
    BadArgumentCount { expected: usize, got: usize },

    /// The function name given to `invoke` is not one of read/write/delete.
    #[error("Received unknown function invocation: {0}")]
    UnknownFunction(String),

    /// The backend failed to serve a read.
    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    ReadFailed {
        key: String,
        #[source]
        source: StateError,
    },

    /// The backend failed to apply a write.
    #[error("Failed to write state for {key}")]
    WriteFailed {
        key: String,
        #[source]
        source: StateError,
    },

    /// The backend failed to remove a key.
    #[error("Failed to delete state")]
    DeleteFailed {
        key: String,
        #[source]
        source: StateError,
    },

    /// The pre-write probe read in record initialization failed. This fires
    /// only on backend malfunction, never because the record exists.
    #[error("Failed to get shoppieNo number")]
    LookupFailed {
        key: String,
        #[source]
        source: StateError,
    },

    /// Index maintenance failed: the index entry could not be read, was
    /// corrupt, or could not be written back.
    #[error("Failed to update shoppie index: {0}")]
    Index(#[from] shoppie_index::IndexError),

    /// Record encoding failed.
    #[error("record codec error: {0}")]
    Record(#[from] shoppie_types::RecordError),
}

/// Convenience alias for contract results.
pub type ContractResult<T> = Result<T, ContractError>;
