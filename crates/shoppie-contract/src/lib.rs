//! Host-facing surface of the shoppie ledger contract.
//!
//! The host ledger platform calls [`ShoppieContract::init`] once at deploy
//! time to seed the fixed starter records, then [`ShoppieContract::invoke`]
//! per transaction with a function name and positional string arguments.
//! [`ShoppieContract::query`] is the read-only entry point. Everything runs
//! as a single synchronous pass against the host-supplied [`WorldState`];
//! ordering and isolation across transactions are the host's concern.
//!
//! # Key Types
//!
//! - [`ShoppieContract`] — dispatch, seeding, and the CRUD handlers
//! - [`ContractConfig`] — injected reserved-key configuration
//! - [`ContractError`] — the failure taxonomy surfaced to the host
//!
//! [`WorldState`]: shoppie_state::WorldState

pub mod config;
pub mod contract;
pub mod error;
pub mod seed;

pub use config::{ContractConfig, DEFAULT_INDEX_KEY};
pub use contract::ShoppieContract;
pub use error::{ContractError, ContractResult};
pub use seed::{SeedShoppie, SEED_SHOPPIES};

// Re-export the types hosts need to drive the contract.
pub use shoppie_state::{MemoryState, StateError, WorldState};
pub use shoppie_types::Shoppie;
