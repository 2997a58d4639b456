//! In-memory pool registry.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::PoolConfig;
use crate::domain::{AccountId, AssetId};
use crate::error::AmmError;
use crate::pools::ExchangePool;
use crate::traits::PoolRegistry;

/// Creates pools and maps each paired asset to its single pool.
///
/// Every pool the factory creates shares the factory's common asset and
/// [`PoolConfig`].  A paired asset is bound to at most one pool, for good.
///
/// # Example
///
/// ```rust
/// use hooliswap::config::PoolConfig;
/// use hooliswap::domain::{AccountId, AssetId};
/// use hooliswap::factory::PoolFactory;
/// use hooliswap::traits::PoolRegistry;
///
/// let eth = AssetId::repeat_byte(0xee);
/// let tkn = AssetId::repeat_byte(0x01);
///
/// let mut factory = PoolFactory::new(eth, PoolConfig::default());
/// let account = factory.create_pool(tkn).expect("first pool for tkn");
///
/// assert_eq!(factory.pool_account(&tkn), Some(account));
/// assert_eq!(account, AccountId::pool_custody(&tkn));
/// assert!(factory.create_pool(tkn).is_err());
/// assert!(factory.resolve_pool(&tkn).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PoolFactory {
    common_asset: AssetId,
    config: PoolConfig,
    pools: BTreeMap<AssetId, ExchangePool>,
}

impl PoolFactory {
    /// Creates a registry with no pools.
    #[must_use]
    pub fn new(common_asset: AssetId, config: PoolConfig) -> Self {
        Self {
            common_asset,
            config,
            pools: BTreeMap::new(),
        }
    }

    /// Builds a factory from a TOML pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] or [`AmmError::InvalidFee`]
    /// if the document does not parse or fails validation.
    pub fn from_toml_str(common_asset: AssetId, source: &str) -> Result<Self, AmmError> {
        Ok(Self::new(common_asset, PoolConfig::from_toml_str(source)?))
    }

    /// Creates an empty pool for `paired` and returns its custody account.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAlreadyExists`] if `paired` already has a pool.
    /// - [`AmmError::InvalidAsset`] if `paired` is the common asset.
    pub fn create_pool(&mut self, paired: AssetId) -> Result<AccountId, AmmError> {
        if self.pools.contains_key(&paired) {
            return Err(AmmError::PoolAlreadyExists(paired));
        }
        let pool = ExchangePool::new(self.common_asset, paired, self.config.clone())?;
        let account = pool.account();
        self.pools.insert(paired, pool);
        info!(%paired, %account, fee = %self.config.fee(), "pool created");
        Ok(account)
    }

    /// Custody account of the pool for `paired`, if one exists.
    #[must_use]
    pub fn pool_account(&self, paired: &AssetId) -> Option<AccountId> {
        self.pools.get(paired).map(ExchangePool::account)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Configuration applied to new pools.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Registered pools, ordered by paired asset.
    pub fn pools(&self) -> impl Iterator<Item = &ExchangePool> {
        self.pools.values()
    }
}

impl PoolRegistry for PoolFactory {
    fn common_asset(&self) -> AssetId {
        self.common_asset
    }

    fn resolve_pool(&self, paired: &AssetId) -> Result<&ExchangePool, AmmError> {
        self.pools.get(paired).ok_or(AmmError::NoSuchPool(*paired))
    }

    fn resolve_pool_mut(&mut self, paired: &AssetId) -> Result<&mut ExchangePool, AmmError> {
        self.pools
            .get_mut(paired)
            .ok_or(AmmError::NoSuchPool(*paired))
    }
}
