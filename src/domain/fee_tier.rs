//! Trading fee expressed as the retained fraction of the input.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// The fraction of a swap's input that reaches the pricing curve.
///
/// A fee tier of `numerator / denominator` keeps
/// `amount_in × numerator / denominator` (truncated) and leaves the rest in
/// the pool as the fee.  The reference pool uses `99 / 100`, a flat 1%.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::ONE_PERCENT;
/// assert_eq!(tier.apply(Amount::new(1_000)).ok(), Some(Amount::new(990)));
/// assert_eq!(tier.fee_on(Amount::new(1_000)).ok(), Some(Amount::new(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeTier {
    numerator: u64,
    denominator: u64,
}

impl FeeTier {
    /// 1% fee: 99 of every 100 input units are priced.
    pub const ONE_PERCENT: Self = Self {
        numerator: 99,
        denominator: 100,
    };

    /// No fee: the whole input is priced.
    pub const FEE_FREE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a fee tier retaining `numerator / denominator` of the input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `denominator` is zero or the
    /// fraction exceeds one.
    pub fn new(numerator: u64, denominator: u64) -> crate::error::Result<Self> {
        let tier = Self {
            numerator,
            denominator,
        };
        tier.validate()?;
        Ok(tier)
    }

    /// Checks that the fraction lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] on a zero denominator or a
    /// numerator above the denominator.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.denominator == 0 {
            return Err(AmmError::InvalidFee("fee denominator must be non-zero"));
        }
        if self.numerator > self.denominator {
            return Err(AmmError::InvalidFee(
                "fee numerator must not exceed denominator",
            ));
        }
        Ok(())
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Input remaining after the fee: `amount × numerator / denominator`,
    /// truncated toward zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if the product exceeds 256 bits.
    /// - [`AmmError::DivisionByZero`] for an unvalidated zero denominator.
    pub fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        let scaled = amount
            .get()
            .checked_mul(U256::from(self.numerator))
            .ok_or(AmmError::Overflow("fee numerator overflow"))?;
        scaled
            .checked_div(U256::from(self.denominator))
            .map(Amount::from_u256)
            .ok_or(AmmError::DivisionByZero)
    }

    /// The part of `amount` kept by the pool as the fee.
    ///
    /// # Errors
    ///
    /// Same as [`FeeTier::apply`].
    pub fn fee_on(&self, amount: Amount) -> crate::error::Result<Amount> {
        let priced = self.apply(amount)?;
        amount
            .checked_sub(&priced)
            .ok_or(AmmError::Underflow("fee exceeds amount"))
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::ONE_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({}/{})", self.numerator, self.denominator)
    }
}
