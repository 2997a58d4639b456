//! Checked arithmetic for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning checked
//! operations of [`Amount`] and [`Shares`] into [`Result`]s with a specific
//! [`AmmError`] variant, so engine code can chain them with `?`.
//!
//! [`mul_div`] covers the one mixed-unit computation every proportional
//! formula in the engine needs: `a × b / d`, truncated toward zero, with
//! the intermediate product checked against the 256-bit range.
//!
//! # Examples
//!
//! ```
//! use hooliswap::domain::Amount;
//! use hooliswap::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum.ok(), Some(Amount::new(300)));
//! ```

use alloy_primitives::U256;

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] past the 256-bit range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }
}

/// `a × b / denominator`, truncated toward zero.
///
/// `context` names the computation in the overflow error.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `a × b` exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
#[inline]
pub fn mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    context: &'static str,
) -> Result<U256, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(AmmError::Overflow(context))?;
    Ok(product / denominator)
}
