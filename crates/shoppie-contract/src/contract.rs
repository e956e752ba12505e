use shoppie_index::ShoppieIndex;
use shoppie_state::WorldState;
use shoppie_types::Shoppie;
use tracing::{debug, info, warn};

use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::seed::SEED_SHOPPIES;

/// The shoppie ledger contract.
///
/// Wraps the host-supplied world state and routes named invocations to the
/// CRUD handlers. One instance serves a deployment; each call is a single
/// synchronous pass with no state retained between invocations. No caller
/// identity is checked here — authorization belongs to the host.
pub struct ShoppieContract<S> {
    state: S,
    config: ContractConfig,
}

impl<S: WorldState> ShoppieContract<S> {
    /// Wrap a world-state accessor with the default configuration.
    pub fn new(state: S) -> Self {
        Self::with_config(state, ContractConfig::default())
    }

    /// Wrap a world-state accessor with explicit configuration.
    pub fn with_config(state: S, config: ContractConfig) -> Self {
        Self { state, config }
    }

    /// The underlying world-state accessor.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    // ---- Host entry points ----

    /// Deploy-time initializer: seed the fixed starter records, in order.
    ///
    /// Aborts on the first failed initialization. Records written by
    /// earlier seeds in the same run are NOT rolled back — the accessor
    /// exposes no transaction boundary, so partial seeding is possible and
    /// the host sees the failure that stopped it.
    pub fn init(&self) -> ContractResult<()> {
        for seed in &SEED_SHOPPIES {
            self.init_shoppie(seed.id, seed.owner, seed.name, seed.transaction)?;
        }
        info!(count = SEED_SHOPPIES.len(), "seeded starter shoppies");
        Ok(())
    }

    /// Per-transaction entry point: route `function` to a handler.
    ///
    /// Recognized names are `read`, `write`, and `delete`; anything else
    /// fails with [`ContractError::UnknownFunction`] regardless of `args`.
    pub fn invoke(&self, function: &str, args: &[String]) -> ContractResult<Vec<u8>> {
        debug!(function, arg_count = args.len(), "invoke");
        match function {
            "read" => self.read(args),
            "write" => self.write(args),
            "delete" => self.delete(args),
            other => {
                warn!(function = other, "unknown function invocation");
                Err(ContractError::UnknownFunction(other.to_string()))
            }
        }
    }

    /// Query-only entry point: always a read, with `args` passed through.
    pub fn query(&self, args: &[String]) -> ContractResult<Vec<u8>> {
        self.read(args)
    }

    // ---- Handlers ----

    /// Read the raw bytes stored at `args[0]`.
    ///
    /// The caller interprets the bytes (as a JSON [`Shoppie`] if the key
    /// names a record). An absent key yields empty bytes rather than an
    /// error, matching the original host's not-found convention.
    pub fn read(&self, args: &[String]) -> ContractResult<Vec<u8>> {
        let [key] = require_args::<1>(args)?;
        let value = self
            .state
            .get(key)
            .map_err(|source| ContractError::ReadFailed {
                key: key.to_string(),
                source,
            })?;
        debug!(key = %key, found = value.is_some(), "read");
        Ok(value.unwrap_or_default())
    }

    /// Overwrite the entry at `args[0]` with the raw bytes of `args[1]`.
    ///
    /// No schema check: the value may or may not be a record, and whatever
    /// the key held before is replaced wholesale.
    pub fn write(&self, args: &[String]) -> ContractResult<Vec<u8>> {
        let [key, value] = require_args::<2>(args)?;
        self.state
            .put(key, value.as_bytes())
            .map_err(|source| ContractError::WriteFailed {
                key: key.to_string(),
                source,
            })?;
        debug!(key = %key, bytes = value.len(), "write");
        Ok(Vec::new())
    }

    /// Remove the entry at `args[0]` and reconcile the index.
    ///
    /// The state delete runs first; if it fails the index is left alone.
    /// The index then drops the first occurrence of the key (absence from
    /// the index is not an error) and is persisted back. Failures loading
    /// or re-persisting the index propagate to the caller.
    pub fn delete(&self, args: &[String]) -> ContractResult<Vec<u8>> {
        let [key] = require_args::<1>(args)?;
        self.state
            .delete(key)
            .map_err(|source| ContractError::DeleteFailed {
                key: key.to_string(),
                source,
            })?;

        let mut index = ShoppieIndex::load(&self.state, &self.config.index_key)?;
        let was_indexed = index.remove_first(key);
        index.save(&self.state, &self.config.index_key)?;
        debug!(key = %key, was_indexed, "delete");
        Ok(Vec::new())
    }

    /// Create a record from its four fields and store it under `id`.
    ///
    /// The probe read before the write only rejects when the backend
    /// itself errors; a successful read of an absent — or existing — key
    /// passes, so re-initializing an id overwrites the old record. That
    /// matches the contract this one replaces (its existence check never
    /// inspected the value it read).
    pub fn init_shoppie(
        &self,
        id: &str,
        owner: &str,
        name: &str,
        transaction: &str,
    ) -> ContractResult<()> {
        self.state
            .get(id)
            .map_err(|source| ContractError::LookupFailed {
                key: id.to_string(),
                source,
            })?;

        let shoppie = Shoppie::new(id, owner, name, transaction);
        let bytes = shoppie.to_bytes()?;
        self.state
            .put(id, &bytes)
            .map_err(|source| ContractError::WriteFailed {
                key: id.to_string(),
                source,
            })?;
        debug!(id = %id, owner = %owner, "shoppie initialized");
        Ok(())
    }
}

/// Check the positional argument count and view the args as a fixed array.
fn require_args<const N: usize>(args: &[String]) -> ContractResult<[&String; N]> {
    let exact: &[String; N] = args
        .try_into()
        .map_err(|_| ContractError::BadArgumentCount {
            expected: N,
            got: args.len(),
        })?;
    Ok(exact.each_ref())
}
