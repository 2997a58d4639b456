//! The fungible-asset ledger consumed by the exchange core.
//!
//! [`AssetLedger`] is the seam to the external token system: balances per
//! owner per asset, direct transfers and allowance-gated transfers.  The
//! core never implements ledger logic itself; it only asks the ledger to
//! move value and relies on two guarantees:
//!
//! 1. **All-or-nothing transfers**: a transfer either moves the full
//!    amount or returns an error and moves nothing.
//! 2. **Allowance gating**: [`AssetLedger::transfer_from`] only succeeds if
//!    `from` has approved `spender` for at least `amount`, and consumes
//!    that much allowance.
//! 3. **Revertible scope**: [`AssetLedger::checkpoint`] opens a scope that
//!    is later either committed or rolled back.  Rolling back restores
//!    every balance and allowance touched inside the scope, the same way a
//!    host chain reverts a failed transaction.  Scopes may nest.
//!
//! An in-memory implementation lives in [`crate::ledger::InMemoryLedger`].

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;

/// Balance tracking and transfers for every asset the pools touch.
pub trait AssetLedger {
    /// Marker identifying an open revertible scope.
    type Checkpoint;

    /// Opens a revertible scope.
    fn checkpoint(&mut self) -> Self::Checkpoint;

    /// Keeps every change made since `checkpoint` and closes the scope.
    fn commit(&mut self, checkpoint: Self::Checkpoint);

    /// Undoes every change made since `checkpoint` and closes the scope.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// Used by a pool to push assets out of its own custody account.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Overflow`] if `to`'s balance would overflow.
    /// - [`LedgerError::Rejected`] for ledger-specific refusals.
    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `from` to `to` on behalf of
    /// `spender`, consuming allowance.
    ///
    /// Used by a pool to pull a caller's deposit or swap input.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if `spender` is not approved
    ///   for `amount`.
    /// - Any error [`AssetLedger::transfer`] can return.
    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Current balance of `asset` held by `owner`.
    #[must_use]
    fn balance_of(&self, owner: AccountId, asset: AssetId) -> Amount;
}
