//! Configuration shared by every pool a factory creates.

use serde::{Deserialize, Serialize};

use crate::domain::FeeTier;
use crate::error::AmmError;

/// Default share token name.
pub const DEFAULT_SHARE_NAME: &str = "Hooliswap-V1";

/// Default share token symbol.
pub const DEFAULT_SHARE_SYMBOL: &str = "HOOLI-V1";

/// Immutable parameters of a pool: trading fee and share token metadata.
///
/// Fields missing from a TOML document fall back to the defaults: a 99/100
/// fee tier and the `Hooliswap-V1` / `HOOLI-V1` share token.
///
/// # Validation
///
/// - The fee fraction must have a non-zero denominator and lie in `[0, 1]`.
/// - Share name and symbol must be non-empty.
///
/// # Examples
///
/// ```
/// use hooliswap::config::PoolConfig;
///
/// let cfg = PoolConfig::from_toml_str(r#"
///     share_symbol = "LP"
///
///     [fee]
///     numerator = 997
///     denominator = 1000
/// "#).expect("valid config");
///
/// assert_eq!(cfg.fee().numerator(), 997);
/// assert_eq!(cfg.share_name(), "Hooliswap-V1");
/// assert_eq!(cfg.share_symbol(), "LP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    fee: FeeTier,
    share_name: String,
    share_symbol: String,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// See [`PoolConfig::validate`].
    pub fn new(
        fee: FeeTier,
        share_name: impl Into<String>,
        share_symbol: impl Into<String>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee,
            share_name: share_name.into(),
            share_symbol: share_symbol.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the document does not parse.
    /// - Any error from [`PoolConfig::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let config: Self =
            toml::from_str(source).map_err(|e| AmmError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] for an out-of-range fee fraction.
    /// - [`AmmError::InvalidConfiguration`] for an empty name or symbol.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee.validate()?;
        if self.share_name.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "share_name must not be empty".to_owned(),
            ));
        }
        if self.share_symbol.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "share_symbol must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Returns the share token name.
    #[must_use]
    pub fn share_name(&self) -> &str {
        &self.share_name
    }

    /// Returns the share token symbol.
    #[must_use]
    pub fn share_symbol(&self) -> &str {
        &self.share_symbol
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee: FeeTier::ONE_PERCENT,
            share_name: DEFAULT_SHARE_NAME.to_owned(),
            share_symbol: DEFAULT_SHARE_SYMBOL.to_owned(),
        }
    }
}
