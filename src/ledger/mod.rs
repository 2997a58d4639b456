//! Ledger-side plumbing: an in-memory [`AssetLedger`] and the transfer
//! journal that makes multi-transfer operations atomic.
//!
//! [`AssetLedger`]: crate::traits::AssetLedger

mod journal;
mod memory;

pub use journal::LedgerJournal;
pub use memory::{Checkpoint, InMemoryLedger};
