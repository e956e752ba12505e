//! Persisted record-id index for the shoppie ledger contract.
//!
//! The index is an ordered list of record identifiers stored as a single
//! JSON array under one reserved world-state key, separate from any record
//! key. It is re-read and re-written whole on every reconciliation — there
//! is no in-memory copy kept between invocations.
//!
//! An index entry that has never been written reads as the empty list; an
//! entry that is present but fails to decode is reported as corruption, not
//! silently replaced.
//!
//! # Key Types
//!
//! - [`ShoppieIndex`] — the ordered id list with load/save against state
//! - [`IndexError`] — corruption and backend failures

pub mod error;
pub mod index;

pub use error::{IndexError, IndexResult};
pub use index::ShoppieIndex;
