//! Record types for the shoppie ledger contract.
//!
//! A [`Shoppie`] is the one domain entity: a record identified by its
//! `shoppieno`, owned by someone, with a display name and a transaction
//! value (a monetary amount carried as text). Records are stored in the
//! host's world state as JSON bytes; the field names in that encoding are
//! lowercase literals and stable across versions.
//!
//! # Key Types
//!
//! - [`Shoppie`] — the record, with its byte codec
//! - [`RecordError`] — codec failures

pub mod error;
pub mod record;

pub use error::{RecordError, RecordResult};
pub use record::Shoppie;
