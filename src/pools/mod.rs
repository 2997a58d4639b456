//! Constant-product pools: reserve bookkeeping, pricing and the pool
//! engine that drives deposits, withdrawals and single-pool swaps.
//!
//! | Item | Role |
//! |------|------|
//! | [`ReserveState`] | reserves, share supply and share balances |
//! | [`quote_output`] / [`spot_price`] | pure pricing functions |
//! | [`ExchangePool`] | liquidity and swap operations against a ledger |

mod exchange_pool;
mod pricing;
mod reserve_state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use exchange_pool::ExchangePool;
pub(crate) use exchange_pool::check_slippage;
pub use pricing::{quote_output, quote_swap, spot_price};
pub use reserve_state::ReserveState;
