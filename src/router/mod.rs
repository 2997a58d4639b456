//! Swap routing through the common asset.
//!
//! [`SwapRouter`] resolves pools through a
//! [`PoolRegistry`](crate::traits::PoolRegistry) and settles swaps
//! against an [`AssetLedger`](crate::traits::AssetLedger).

mod swap_router;

pub use swap_router::SwapRouter;
