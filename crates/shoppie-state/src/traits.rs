use crate::error::StateResult;

/// Host-provided key/value interface over durable world state.
///
/// All implementations must satisfy these invariants:
/// - `get` returns `Ok(None)` for an absent key; `Err` is reserved for
///   backend malfunction. An empty value and an absent key are distinct at
///   this boundary even if a host surface later collapses them.
/// - `put` unconditionally overwrites. The store never interprets values.
/// - `delete` of an absent key is a no-op, not an error.
/// - No operation retries internally; errors propagate to the caller once.
///
/// The contract holds no state of its own between invocations — every
/// operation re-reads through this interface, so isolation between
/// concurrent invocations is entirely the host's responsibility.
pub trait WorldState: Send + Sync {
    /// Read the value stored at `key`, or `Ok(None)` if absent.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Store `value` at `key`, replacing any existing value.
    fn put(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Remove `key` from state. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> StateResult<()>;
}
