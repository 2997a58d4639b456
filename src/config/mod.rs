//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint every pool is built from:
//! the fee tier and the share token's metadata.  It can be built in code
//! or parsed from TOML.

mod pool_config;

pub use pool_config::{PoolConfig, DEFAULT_SHARE_NAME, DEFAULT_SHARE_SYMBOL};
