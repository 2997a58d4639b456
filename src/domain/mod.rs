//! Fundamental domain value types used throughout the exchange core.
//!
//! Amounts, shares, identifiers, fee tiers, prices and operation receipts.
//! All quantities are 256-bit newtypes with checked arithmetic so that
//! asset amounts and share counts cannot be confused.

mod amount;
mod asset_id;
mod fee_tier;
mod price;
mod shares;
mod swap_direction;
mod swap_result;
mod withdrawal;

pub use amount::Amount;
pub use asset_id::{AccountId, AssetId};
pub use fee_tier::FeeTier;
pub use price::Price;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
pub use swap_result::SwapResult;
pub use withdrawal::Withdrawal;
