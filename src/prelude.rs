//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hooliswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, FeeTier, Price, Shares, SwapDirection, SwapResult, Withdrawal,
};

pub use crate::traits::{AssetLedger, PoolRegistry};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, LedgerError, Result};

pub use crate::factory::PoolFactory;

pub use crate::ledger::{InMemoryLedger, LedgerJournal};

pub use crate::pools::ExchangePool;

pub use crate::router::SwapRouter;
