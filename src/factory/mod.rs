//! Pool creation and lookup.
//!
//! [`PoolFactory`] creates one [`ExchangePool`](crate::pools::ExchangePool)
//! per paired asset, rejects duplicates and implements
//! [`PoolRegistry`](crate::traits::PoolRegistry) so the router can resolve
//! pools through it.
//!
//! # Usage
//!
//! ```rust
//! use hooliswap::config::PoolConfig;
//! use hooliswap::domain::AssetId;
//! use hooliswap::error::AmmError;
//! use hooliswap::factory::PoolFactory;
//!
//! let eth = AssetId::repeat_byte(0xee);
//! let mut factory = PoolFactory::new(eth, PoolConfig::default());
//! assert!(matches!(factory.create_pool(eth), Err(AmmError::InvalidAsset(_))));
//! ```

mod pool_factory;

pub use pool_factory::PoolFactory;
