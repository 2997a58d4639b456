//! In-memory asset ledger with ERC-20 style allowances.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

/// A self-contained [`AssetLedger`] backed by hash maps.
///
/// Balances are keyed by `(owner, asset)` and allowances by
/// `(owner, spender, asset)`.  Every transfer validates both sides before
/// writing either, so a failed transfer leaves the ledger untouched.
///
/// While a [`Checkpoint`] is open, each write records the value it
/// replaced in an undo log; rolling back replays that log in reverse.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{AccountId, Amount, AssetId};
/// use hooliswap::ledger::InMemoryLedger;
/// use hooliswap::traits::AssetLedger;
///
/// let alice = AccountId::repeat_byte(0xa1);
/// let bob = AccountId::repeat_byte(0xb0);
/// let usd = AssetId::repeat_byte(1);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(alice, usd, Amount::new(100)).expect("mint");
///
/// let scope = ledger.checkpoint();
/// ledger.transfer(alice, bob, usd, Amount::new(40)).expect("transfer");
/// ledger.rollback(scope);
/// assert_eq!(ledger.balance_of(bob, usd), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<BalanceKey, Amount>,
    allowances: HashMap<AllowanceKey, Amount>,
    undo: Vec<UndoEntry>,
    open_scopes: usize,
}

type BalanceKey = (AccountId, AssetId);
type AllowanceKey = (AccountId, AccountId, AssetId);

#[derive(Debug, Clone, Copy)]
enum UndoEntry {
    Balance(BalanceKey, Amount),
    Allowance(AllowanceKey, Amount),
}

/// An open revertible scope on an [`InMemoryLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Checkpoint {
    mark: usize,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `owner` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the balance would overflow.
    pub fn mint(
        &mut self,
        owner: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let credited = self
            .balance_of(owner, asset)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow(owner))?;
        self.set_balance((owner, asset), credited);
        Ok(())
    }

    /// Sets the amount of `asset` that `spender` may pull from `owner`.
    ///
    /// Replaces any previous allowance.
    pub fn approve(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: AssetId,
        amount: Amount,
    ) {
        self.set_allowance((owner, spender, asset), amount);
    }

    /// Remaining allowance of `spender` over `owner`'s `asset`.
    #[must_use]
    pub fn allowance(&self, owner: AccountId, spender: AccountId, asset: AssetId) -> Amount {
        self.allowances
            .get(&(owner, spender, asset))
            .copied()
            .unwrap_or_default()
    }

    /// Computes both post-transfer balances without writing anything.
    fn plan_transfer(
        &self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(Amount, Amount), LedgerError> {
        let available = self.balance_of(from, asset);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                owner: from,
                asset,
                available,
                required: amount,
            })?;
        let credited = if from == to {
            available
        } else {
            self.balance_of(to, asset)
                .checked_add(&amount)
                .ok_or(LedgerError::Overflow(to))?
        };
        Ok((debited, credited))
    }

    fn commit_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        (debited, credited): (Amount, Amount),
    ) {
        if from == to {
            return;
        }
        self.set_balance((from, asset), debited);
        self.set_balance((to, asset), credited);
    }

    fn set_balance(&mut self, key: BalanceKey, value: Amount) {
        let previous = write_entry(&mut self.balances, key, value);
        if self.open_scopes > 0 {
            self.undo.push(UndoEntry::Balance(key, previous));
        }
    }

    fn set_allowance(&mut self, key: AllowanceKey, value: Amount) {
        let previous = write_entry(&mut self.allowances, key, value);
        if self.open_scopes > 0 {
            self.undo.push(UndoEntry::Allowance(key, previous));
        }
    }

    fn close_scope(&mut self) {
        self.open_scopes = self.open_scopes.saturating_sub(1);
        if self.open_scopes == 0 {
            self.undo.clear();
        }
    }
}

/// Writes `value` (dropping zero entries) and returns what it replaced.
fn write_entry<K: Eq + Hash>(map: &mut HashMap<K, Amount>, key: K, value: Amount) -> Amount {
    let previous = if value.is_zero() {
        map.remove(&key)
    } else {
        map.insert(key, value)
    };
    previous.unwrap_or_default()
}

impl AssetLedger for InMemoryLedger {
    type Checkpoint = Checkpoint;

    fn checkpoint(&mut self) -> Checkpoint {
        self.open_scopes += 1;
        Checkpoint {
            mark: self.undo.len(),
        }
    }

    fn commit(&mut self, _checkpoint: Checkpoint) {
        self.close_scope();
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        while self.undo.len() > checkpoint.mark {
            match self.undo.pop() {
                Some(UndoEntry::Balance(key, previous)) => {
                    let _ = write_entry(&mut self.balances, key, previous);
                }
                Some(UndoEntry::Allowance(key, previous)) => {
                    let _ = write_entry(&mut self.allowances, key, previous);
                }
                None => break,
            }
        }
        self.close_scope();
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let plan = self.plan_transfer(from, to, asset, amount)?;
        self.commit_transfer(from, to, asset, plan);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowed = self.allowance(from, spender, asset);
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                owner: from,
                spender,
                asset,
                allowed,
                required: amount,
            })?;
        let plan = self.plan_transfer(from, to, asset, amount)?;
        self.commit_transfer(from, to, asset, plan);
        self.approve(from, spender, asset, remaining);
        Ok(())
    }

    fn balance_of(&self, owner: AccountId, asset: AssetId) -> Amount {
        self.balances
            .get(&(owner, asset))
            .copied()
            .unwrap_or_default()
    }
}
