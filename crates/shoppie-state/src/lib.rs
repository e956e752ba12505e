//! World-state access boundary for the shoppie ledger contract.
//!
//! The host ledger platform owns durable storage; this crate only defines
//! the seam the contract reaches through. Keys and values are opaque from
//! the contract's perspective — string keys, byte values, no interpretation.
//!
//! # Key Types
//!
//! - [`WorldState`] — the host-provided get/put/delete interface
//! - [`MemoryState`] — BTreeMap-backed implementation for tests and embedding
//! - [`StateError`] — backend failures

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use memory::MemoryState;
pub use traits::WorldState;
