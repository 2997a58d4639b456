//! Outcome of a swap operation.

use core::fmt;

use super::{Amount, Price};
use crate::error::AmmError;

/// The outcome of a swap: input taken, output delivered and the fee the
/// pool kept out of the input.
///
/// # Invariants
///
/// - `fee <= amount_in`.
/// - A zero-input swap has zero output and zero fee.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{Amount, SwapResult};
///
/// let result = SwapResult::new(Amount::new(1000), Amount::new(990), Amount::new(10));
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapResult {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a `SwapResult`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `fee > amount_in`.
    pub fn new(amount_in: Amount, amount_out: Amount, fee: Amount) -> crate::error::Result<Self> {
        if fee > amount_in {
            return Err(AmmError::Underflow("fee larger than amount_in"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// The result of a zero-input swap.
    pub const fn zero() -> Self {
        Self {
            amount_in: Amount::ZERO,
            amount_out: Amount::ZERO,
            fee: Amount::ZERO,
        }
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee kept by the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Realized price as `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero-input swap.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        Price::from_amounts(self.amount_out, self.amount_in)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}
