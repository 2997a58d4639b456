//! Unified error types for the exchange core.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Failures
//! raised by the external asset ledger are carried as [`LedgerError`] and
//! surface to callers wrapped in [`AmmError::TransferFailed`].
//!
//! An error always means the whole operation was abandoned: reserves,
//! share balances and ledger balances are exactly as they were before the
//! call.

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId, Shares};

/// Errors reported by the pricing, liquidity and routing engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Pricing or swapping against a pool whose reserves are zero.
    #[error("pool has no reserves")]
    EmptyPool,

    /// A deposit offered less paired asset than the current ratio requires.
    #[error("insufficient paired amount: required {required}, provided {provided}")]
    InsufficientPairedAmount {
        /// Paired amount needed to preserve the reserve ratio.
        required: Amount,
        /// Maximum paired amount the caller offered.
        provided: Amount,
    },

    /// A withdrawal or share transfer exceeds the holder's balance.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller tried to burn or move.
        requested: Shares,
        /// Shares the holder actually owns.
        available: Shares,
    },

    /// The swap output fell below the caller's minimum.
    #[error("slippage exceeded: output {amount_out} below minimum {min_amount_out}")]
    SlippageExceeded {
        /// Output the swap would have produced.
        amount_out: Amount,
        /// Minimum output the caller accepts.
        min_amount_out: Amount,
    },

    /// The registry has no pool for the asset.
    #[error("no pool registered for asset {0}")]
    NoSuchPool(AssetId),

    /// A pool for the asset is already registered.
    #[error("pool already exists for asset {0}")]
    PoolAlreadyExists(AssetId),

    /// The underlying ledger rejected a pull or push.
    #[error("asset transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// The swap output would be paid to a pool's own custody account.
    #[error("recipient {0} is a pool custody account")]
    InvalidRecipient(AccountId),

    /// Reserves and share supply must be all zero or all positive.
    #[error("inconsistent reserves: {0}")]
    InconsistentReserves(&'static str),

    /// An asset is not traded by the pool, or the pair is degenerate.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Fee parameters are out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Configuration failed validation or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Checked arithmetic exceeded the 256-bit range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked subtraction went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Failures reported by an [`AssetLedger`](crate::traits::AssetLedger).
///
/// A ledger transfer either moves the full amount or fails with one of
/// these and moves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The sender does not hold enough of the asset.
    #[error("{owner} holds {available} of {asset}, needs {required}")]
    InsufficientBalance {
        /// Account being debited.
        owner: AccountId,
        /// Asset being moved.
        asset: AssetId,
        /// Balance currently held.
        available: Amount,
        /// Amount the transfer needs.
        required: Amount,
    },

    /// The spender's allowance does not cover the transfer.
    #[error("{spender} may move {allowed} of {asset} for {owner}, needs {required}")]
    InsufficientAllowance {
        /// Account whose funds are pulled.
        owner: AccountId,
        /// Account performing the pull.
        spender: AccountId,
        /// Asset being moved.
        asset: AssetId,
        /// Remaining allowance.
        allowed: Amount,
        /// Amount the transfer needs.
        required: Amount,
    },

    /// A credit would overflow the recipient's balance.
    #[error("balance overflow crediting {0}")]
    Overflow(AccountId),

    /// The ledger refused the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
