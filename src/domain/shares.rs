//! Pool share units.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// A quantity of pool shares: a claim on a proportional slice of a pool's
/// reserves.
///
/// Kept distinct from [`Amount`] so that share counts and asset quantities
/// cannot be mixed up by accident.  The only bridge is the explicit
/// [`Shares::from_amount`] used for the first deposit, where one share is
/// minted per unit of common asset.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[must_use]
pub struct Shares(U256);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Creates `Shares` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a raw `U256`.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// One share per unit of `amount`.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }

    /// Returns the underlying `U256`.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
