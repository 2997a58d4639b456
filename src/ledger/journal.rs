//! Revertible transfer scope for a single engine operation.

use tracing::{debug, warn};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;
use crate::traits::AssetLedger;

/// Groups every ledger transfer of one engine operation into a single
/// revertible unit.
///
/// [`LedgerJournal::begin`] opens a ledger checkpoint.  The operation then
/// pulls and pushes through the journal and finishes with
/// [`LedgerJournal::commit`].  If the journal is dropped without being
/// committed (an early `?` return, typically) the checkpoint is rolled
/// back and every transfer made through it is undone.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{AccountId, Amount, AssetId};
/// use hooliswap::ledger::{InMemoryLedger, LedgerJournal};
/// use hooliswap::traits::AssetLedger;
///
/// let pool = AccountId::repeat_byte(0xcc);
/// let user = AccountId::repeat_byte(0xa1);
/// let usd = AssetId::repeat_byte(1);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(pool, usd, Amount::new(10)).expect("mint");
/// {
///     let mut journal = LedgerJournal::begin(&mut ledger);
///     journal.push(pool, user, usd, Amount::new(10)).expect("push");
///     // dropped without commit
/// }
/// assert_eq!(ledger.balance_of(pool, usd), Amount::new(10));
/// ```
pub struct LedgerJournal<'a, L: AssetLedger> {
    ledger: &'a mut L,
    checkpoint: Option<L::Checkpoint>,
}

impl<'a, L: AssetLedger> LedgerJournal<'a, L> {
    /// Opens a revertible scope on `ledger`.
    pub fn begin(ledger: &'a mut L) -> Self {
        let checkpoint = ledger.checkpoint();
        Self {
            ledger,
            checkpoint: Some(checkpoint),
        }
    }

    /// Pulls `amount` of `asset` from `from` into the `pool` account using
    /// the allowance `from` granted to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the ledger refuses.
    pub fn pull(
        &mut self,
        pool: AccountId,
        from: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.ledger
            .transfer_from(pool, from, pool, asset, amount)
            .map_err(|err| {
                debug!(%pool, %from, %asset, %amount, error = %err, "pull rejected");
                AmmError::TransferFailed(err)
            })
    }

    /// Pushes `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the ledger refuses.
    pub fn push(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.ledger.transfer(from, to, asset, amount).map_err(|err| {
            debug!(%from, %to, %asset, %amount, error = %err, "push rejected");
            AmmError::TransferFailed(err)
        })
    }

    /// Keeps every transfer made through the journal.
    pub fn commit(mut self) {
        if let Some(checkpoint) = self.checkpoint.take() {
            self.ledger.commit(checkpoint);
        }
    }
}

impl<L: AssetLedger> Drop for LedgerJournal<'_, L> {
    fn drop(&mut self) {
        if let Some(checkpoint) = self.checkpoint.take() {
            warn!("operation aborted, rolling back ledger transfers");
            self.ledger.rollback(checkpoint);
        }
    }
}
