//! Informational exchange rate between the two reserves.

use core::fmt;

use alloy_primitives::U256;

use super::Amount;
use crate::error::AmmError;

/// Fixed-point scale used by [`Price::to_wad`]: 10^18.
const WAD: u128 = 1_000_000_000_000_000_000;

/// Exact ratio `numerator / denominator` between two amounts.
///
/// Prices are only quoted, never settled against: swap settlement always
/// goes through the fee-adjusted output formula.  The ratio is kept exact
/// and only truncated when converted to fixed point.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{Amount, Price};
///
/// let price = Price::from_amounts(Amount::new(200), Amount::new(100)).expect("non-zero");
/// assert_eq!(price.to_string(), "2.000000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price {
    numerator: Amount,
    denominator: Amount,
}

impl Price {
    /// Creates the ratio `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn from_amounts(numerator: Amount, denominator: Amount) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    pub const fn numerator(&self) -> Amount {
        self.numerator
    }

    /// Returns the denominator.
    pub const fn denominator(&self) -> Amount {
        self.denominator
    }

    /// `numerator × scale / denominator`, truncated.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product exceeds 256 bits.
    pub fn scaled(&self, scale: Amount) -> crate::error::Result<Amount> {
        let product = self
            .numerator
            .checked_mul(&scale)
            .ok_or(AmmError::Overflow("price scaling overflow"))?;
        product
            .checked_div(&self.denominator)
            .ok_or(AmmError::DivisionByZero)
    }

    /// The ratio as an 18-decimal fixed-point amount.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the numerator exceeds `2^256 / 10^18`.
    pub fn to_wad(&self) -> crate::error::Result<Amount> {
        self.scaled(Amount::new(WAD))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let den = self.denominator.get();
        let num = self.numerator.get();
        let whole = num / den;
        let rem = num % den;
        // rem < den, so rem × 10^18 only overflows for denominators near 2^196
        let Some(frac) = rem
            .checked_mul(U256::from(WAD))
            .map(|scaled| scaled / den)
        else {
            return write!(f, "{whole}");
        };
        let digits = frac.to_string();
        write!(f, "{whole}.{digits:0>18}")
    }
}
