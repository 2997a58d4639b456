//! Raw asset amount with checked 256-bit arithmetic.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A raw asset amount in the smallest unit (wei or equivalent).
///
/// `Amount` never interprets decimals.  All `U256` values are valid
/// amounts.  Arithmetic methods are checked: they return `None` on
/// overflow, underflow or division by zero instead of wrapping or
/// panicking.  Division always truncates toward zero.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(b.checked_div(&Amount::new(3)), Some(Amount::new(66)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Creates an `Amount` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a raw `U256`.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Creates an amount of `whole` units at `decimals` precision, i.e.
    /// `whole × 10^decimals`.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_from_units(whole: u128, decimals: u8) -> Option<Self> {
        let scale = U256::from(10u8).checked_pow(U256::from(decimals))?;
        U256::from(whole).checked_mul(scale).map(Self)
    }

    /// Returns the underlying `U256`.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Truncating division.  Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.0.checked_div(divisor.0).map(Self)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
