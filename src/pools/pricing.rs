//! Pure pricing functions for the constant-product curve.
//!
//! # Swap Algorithm
//!
//! 1. `after_fee = amount_in × fee_numerator / fee_denominator`
//! 2. `amount_out = after_fee × reserve_out / (reserve_in + after_fee)`
//!
//! Both divisions truncate.  The whole `amount_in` is added to the input
//! reserve, so the fee and the truncation residue stay in the pool and
//! `reserve_in × reserve_out` never decreases.

use tracing::debug;

use crate::domain::{Amount, FeeTier, Price, SwapResult};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};

/// Output of selling `amount_in` against `(reserve_in, reserve_out)`.
///
/// A zero input quotes zero before the reserves are inspected.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::Overflow`] if an intermediate product exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{Amount, FeeTier};
/// use hooliswap::pools::quote_output;
///
/// let out = quote_output(
///     Amount::new(100_000_000_000_000_000_000),
///     Amount::new(200_000_000_000_000_000_000),
///     Amount::new(1_000_000_000_000_000_000),
///     FeeTier::ONE_PERCENT,
/// )
/// .expect("priced");
/// assert_eq!(out, Amount::new(1_960_590_157_441_330_824));
/// ```
pub fn quote_output(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    Ok(quote_swap(reserve_in, reserve_out, amount_in, fee)?.amount_out())
}

/// Same as [`quote_output`] but returns the full receipt, including the
/// part of the input kept as fee.
///
/// # Errors
///
/// Same as [`quote_output`].
pub fn quote_swap(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee: FeeTier,
) -> Result<SwapResult, AmmError> {
    if amount_in.is_zero() {
        return Ok(SwapResult::zero());
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }

    let after_fee = fee.apply(amount_in)?;
    let denominator = reserve_in.safe_add(&after_fee)?;
    let amount_out = mul_div(
        after_fee.get(),
        reserve_out.get(),
        denominator.get(),
        "swap output overflow",
    )
    .map(Amount::from_u256)?;
    let fee_kept = amount_in.safe_sub(&after_fee)?;

    debug!(
        %reserve_in,
        %reserve_out,
        %amount_in,
        %after_fee,
        %amount_out,
        "quoted swap"
    );
    SwapResult::new(amount_in, amount_out, fee_kept)
}

/// Informational ratio `reserve_a / reserve_b`.  Never used for settlement.
///
/// # Errors
///
/// Returns [`AmmError::EmptyPool`] if either reserve is zero.
pub fn spot_price(reserve_a: Amount, reserve_b: Amount) -> Result<Price, AmmError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    Price::from_amounts(reserve_a, reserve_b)
}
