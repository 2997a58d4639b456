//! Pool lookup consumed by the swap router.
//!
//! The registry maps a paired asset to the single pool trading it against
//! the common asset.  It is injected into the router rather than reached
//! through a global, so tests can supply exactly the pools they need.
//!
//! [`crate::factory::PoolFactory`] is the in-crate implementation.

use crate::domain::AssetId;
use crate::error::AmmError;
use crate::pools::ExchangePool;

/// Resolves asset identifiers to pool instances.
pub trait PoolRegistry {
    /// The asset present in every pool, used as the hop between two pools.
    #[must_use]
    fn common_asset(&self) -> AssetId;

    /// Returns the pool trading `paired` against the common asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoSuchPool`] if no pool is registered for
    /// `paired`.
    fn resolve_pool(&self, paired: &AssetId) -> Result<&ExchangePool, AmmError>;

    /// Mutable variant of [`PoolRegistry::resolve_pool`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoSuchPool`] if no pool is registered for
    /// `paired`.
    fn resolve_pool_mut(&mut self, paired: &AssetId) -> Result<&mut ExchangePool, AmmError>;
}
