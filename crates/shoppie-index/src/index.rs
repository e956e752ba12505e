use shoppie_state::WorldState;

use crate::error::{IndexError, IndexResult};

/// Ordered list of record ids, persisted whole under one reserved key.
///
/// The wire form is a JSON array of strings, so an index written by the
/// original producer decodes unchanged. Order is insertion order and is
/// preserved by every mutation here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppieIndex {
    ids: Vec<String>,
}

impl ShoppieIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Load the index from world state.
    ///
    /// An absent entry (or an empty value, which some hosts hand back for
    /// absent keys) loads as the empty index. Present-but-malformed bytes
    /// are reported as [`IndexError::Corrupt`]; backend failures propagate.
    pub fn load(state: &dyn WorldState, key: &str) -> IndexResult<Self> {
        let bytes = match state.get(key)? {
            None => return Ok(Self::new()),
            Some(bytes) if bytes.is_empty() => return Ok(Self::new()),
            Some(bytes) => bytes,
        };
        let ids: Vec<String> =
            serde_json::from_slice(&bytes).map_err(|e| IndexError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { ids })
    }

    /// Re-encode and persist the index under `key`.
    pub fn save(&self, state: &dyn WorldState, key: &str) -> IndexResult<()> {
        // Vec<String> to JSON cannot fail; corruption is a read-side concern.
        let bytes = serde_json::to_vec(&self.ids).map_err(|e| IndexError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        state.put(key, &bytes)?;
        Ok(())
    }

    /// Remove the first occurrence of `id`, preserving the relative order
    /// of all other entries. Returns `false` if `id` was not present.
    pub fn remove_first(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|entry| entry == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Append an id to the end of the index.
    pub fn push(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }

    /// Returns `true` if `id` appears in the index.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|entry| entry == id)
    }

    /// The ids in index order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of ids in the index.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the index holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use shoppie_state::MemoryState;

    use super::*;

    const KEY: &str = "_testindex";

    #[test]
    fn absent_entry_loads_as_empty() {
        let state = MemoryState::new();
        let index = ShoppieIndex::load(&state, KEY).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn empty_bytes_load_as_empty() {
        let state = MemoryState::new();
        state.put(KEY, b"").unwrap();
        let index = ShoppieIndex::load(&state, KEY).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let state = MemoryState::new();
        let mut index = ShoppieIndex::new();
        index.push("1");
        index.push("2");
        index.save(&state, KEY).unwrap();

        let loaded = ShoppieIndex::load(&state, KEY).unwrap();
        assert_eq!(loaded, index);
    }

    #[test]
    fn wire_form_is_a_json_string_array() {
        let state = MemoryState::new();
        let mut index = ShoppieIndex::new();
        index.push("a");
        index.push("b");
        index.save(&state, KEY).unwrap();

        let bytes = state.get(KEY).unwrap().unwrap();
        assert_eq!(bytes, br#"["a","b"]"#);
    }

    #[test]
    fn malformed_bytes_are_corruption_not_empty() {
        let state = MemoryState::new();
        state.put(KEY, b"{not an array").unwrap();
        let err = ShoppieIndex::load(&state, KEY).unwrap_err();
        assert!(matches!(err, IndexError::Corrupt { .. }));
    }

    #[test]
    fn remove_first_takes_one_occurrence_and_keeps_order() {
        let mut index = ShoppieIndex::new();
        for id in ["1", "2", "3", "2", "4"] {
            index.push(id);
        }
        assert!(index.remove_first("2"));
        assert_eq!(index.ids(), ["1", "3", "2", "4"]);
    }

    #[test]
    fn remove_of_absent_id_leaves_index_unchanged() {
        let mut index = ShoppieIndex::new();
        index.push("1");
        assert!(!index.remove_first("9"));
        assert_eq!(index.ids(), ["1"]);
    }
}
