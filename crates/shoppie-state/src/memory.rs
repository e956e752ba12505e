use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::traits::WorldState;

/// In-memory world state backed by a `BTreeMap`.
///
/// Intended for tests and embedding. Entries live behind a `RwLock` so the
/// backend is safe to share across threads; a BTreeMap rather than a
/// HashMap keeps `keys()` output deterministic.
#[derive(Default)]
pub struct MemoryState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the state holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// All keys currently present, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        map.keys().cloned().collect()
    }
}

impl WorldState for MemoryState {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StateResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.remove(key);
        Ok(())
    }
}

impl std::fmt::Debug for MemoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryState")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state() {
        let state = MemoryState::new();
        assert!(state.is_empty());
        assert_eq!(state.get("missing").unwrap(), None);
    }

    #[test]
    fn put_then_get() {
        let state = MemoryState::new();
        state.put("k", b"v").unwrap();
        assert_eq!(state.get("k").unwrap(), Some(b"v".to_vec()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn put_overwrites() {
        let state = MemoryState::new();
        state.put("k", b"v1").unwrap();
        state.put("k", b"v2").unwrap();
        assert_eq!(state.get("k").unwrap(), Some(b"v2".to_vec()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn delete_removes_entry() {
        let state = MemoryState::new();
        state.put("k", b"v").unwrap();
        state.delete("k").unwrap();
        assert_eq!(state.get("k").unwrap(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn delete_of_absent_key_is_ok() {
        let state = MemoryState::new();
        assert!(state.delete("never-written").is_ok());
    }

    #[test]
    fn empty_value_is_distinct_from_absent() {
        let state = MemoryState::new();
        state.put("k", b"").unwrap();
        assert_eq!(state.get("k").unwrap(), Some(vec![]));
        assert_eq!(state.get("other").unwrap(), None);
    }

    #[test]
    fn keys_are_sorted() {
        let state = MemoryState::new();
        state.put("b", b"2").unwrap();
        state.put("a", b"1").unwrap();
        state.put("c", b"3").unwrap();
        assert_eq!(state.keys(), vec!["a", "b", "c"]);
    }
}
