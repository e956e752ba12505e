use thiserror::Error;

/// Errors from the world-state backend.
///
/// These represent backend malfunction, never "key not found": absence is
/// signalled in-band as `Ok(None)` from [`WorldState::get`].
///
/// [`WorldState::get`]: crate::traits::WorldState::get
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The backend failed to serve a read.
    #[error("state read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    /// The backend failed to apply a write.
    #[error("state write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    /// The backend failed to apply a delete.
    #[error("state delete failed for key {key}: {reason}")]
    DeleteFailed { key: String, reason: String },

    /// The backend is unavailable or misbehaving in a way that is not
    /// attributable to a single key.
    #[error("state backend unavailable: {0}")]
    Unavailable(String),
}

/// Convenience alias for state operations.
pub type StateResult<T> = Result<T, StateError>;
