use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// A shoppie record: the single domain entity tracked in world state.
///
/// The `shoppie_no` is the record's identity and doubles as its state key.
/// Once created, the identity never changes; a write at that key replaces
/// the whole record value, it never merges. All fields are strings — the
/// `transaction` field carries a monetary value as text (e.g. `"0.00"`),
/// which keeps the wire form byte-stable regardless of numeric formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoppie {
    /// Unique record identifier; also the world-state key.
    #[serde(rename = "shoppieno")]
    pub shoppie_no: String,
    /// Current owner of the record.
    pub owner: String,
    /// Display name of the item.
    pub name: String,
    /// Monetary value as text.
    pub transaction: String,
}

impl Shoppie {
    /// Build a record from its four fields.
    pub fn new(
        shoppie_no: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
        transaction: impl Into<String>,
    ) -> Self {
        Self {
            shoppie_no: shoppie_no.into(),
            owner: owner.into(),
            name: name.into(),
            transaction: transaction.into(),
        }
    }

    /// Encode to the stored JSON form.
    ///
    /// Field names are the lowercase literals `shoppieno`, `owner`, `name`,
    /// `transaction`, stable across versions.
    pub fn to_bytes(&self) -> RecordResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| RecordError::Serialization(e.to_string()))
    }

    /// Decode from stored bytes.
    pub fn from_bytes(bytes: &[u8]) -> RecordResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| RecordError::Deserialization(e.to_string()))
    }
}

impl fmt::Display for Shoppie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shoppie {} ({}, owned by {})", self.shoppie_no, self.name, self.owner)
    }
}
