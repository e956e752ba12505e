/// Default reserved key the record-id index is persisted under.
///
/// Kept for wire compatibility with state written by the original contract.
pub const DEFAULT_INDEX_KEY: &str = "_shoppieindex";

/// Contract configuration, injected at construction.
///
/// The index key is explicit configuration rather than a literal buried in
/// the delete path, so a deployment can move it out of the way of record
/// ids that might collide with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// World-state key the index is stored under. Must not be used as a
    /// record id by the deployment.
    pub index_key: String,
}

impl ContractConfig {
    /// Configuration with a custom index key.
    pub fn new(index_key: impl Into<String>) -> Self {
        Self {
            index_key: index_key.into(),
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_reserved_key() {
        assert_eq!(ContractConfig::default().index_key, "_shoppieindex");
    }

    #[test]
    fn custom_key_is_kept() {
        let config = ContractConfig::new("idx/shoppies");
        assert_eq!(config.index_key, "idx/shoppies");
    }
}
