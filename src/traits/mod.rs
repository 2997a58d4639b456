//! Core trait abstractions for the two external collaborators.
//!
//! [`AssetLedger`] moves value between accounts; [`PoolRegistry`] resolves
//! an asset to its pool.  Both are injected into the engine so callers and
//! tests decide which implementation backs them.

mod asset_ledger;
mod pool_registry;

pub use asset_ledger::AssetLedger;
pub use pool_registry::PoolRegistry;
