//! Reserve and share bookkeeping for a single pool.
//!
//! [`ReserveState`] owns the two reserves, the share supply and the
//! per-holder share table.  It never touches the ledger: engine code
//! moves assets and then records the effect here.
//!
//! # Invariants
//!
//! - `reserve_common == 0 ⇔ reserve_paired == 0 ⇔ share_supply == 0`
//! - `share_supply` equals the sum of all share balances.
//! - Neither reserve goes negative.
//!
//! Every mutator computes all of its new values first and assigns them
//! only when nothing can fail, so an error leaves the state untouched.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Shares, SwapDirection};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// The mutable state of one pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveState {
    reserve_common: Amount,
    reserve_paired: Amount,
    share_supply: Shares,
    share_balances: BTreeMap<AccountId, Shares>,
}

impl ReserveState {
    /// An empty pool state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(reserve_common, reserve_paired)`.
    #[must_use]
    pub const fn current_reserves(&self) -> (Amount, Amount) {
        (self.reserve_common, self.reserve_paired)
    }

    /// Total shares outstanding.
    #[must_use]
    pub const fn share_supply(&self) -> Shares {
        self.share_supply
    }

    /// Shares held by `holder`.
    #[must_use]
    pub fn share_balance(&self, holder: &AccountId) -> Shares {
        self.share_balances
            .get(holder)
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// `true` when the pool holds no reserves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.share_supply.is_zero()
    }

    /// Records a deposit: both reserves grow and `holder` is credited.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if a reserve, the supply or the holder's
    ///   balance would exceed 256 bits.
    /// - [`AmmError::InconsistentReserves`] if the deposit would break the
    ///   all-zero-or-all-positive invariant.
    pub fn apply_deposit(
        &mut self,
        delta_common: Amount,
        delta_paired: Amount,
        shares_minted: Shares,
        holder: AccountId,
    ) -> Result<(), AmmError> {
        let reserve_common = self.reserve_common.safe_add(&delta_common)?;
        let reserve_paired = self.reserve_paired.safe_add(&delta_paired)?;
        let share_supply = self.share_supply.safe_add(&shares_minted)?;
        let balance = self.share_balance(&holder).safe_add(&shares_minted)?;
        check_emptiness(reserve_common, reserve_paired, share_supply)?;

        self.reserve_common = reserve_common;
        self.reserve_paired = reserve_paired;
        self.share_supply = share_supply;
        self.write_balance(holder, balance);
        Ok(())
    }

    /// Records a withdrawal: `holder` burns shares and both reserves shrink.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `holder` owns fewer than
    ///   `shares_burned`.
    /// - [`AmmError::Underflow`] if a reserve would go negative.
    /// - [`AmmError::InconsistentReserves`] if the result would leave one reserve
    ///   zero and the other positive.
    pub fn apply_withdrawal(
        &mut self,
        shares_burned: Shares,
        delta_common: Amount,
        delta_paired: Amount,
        holder: AccountId,
    ) -> Result<(), AmmError> {
        let available = self.share_balance(&holder);
        let balance = available
            .checked_sub(&shares_burned)
            .ok_or(AmmError::InsufficientShares {
                requested: shares_burned,
                available,
            })?;
        let share_supply = self.share_supply.safe_sub(&shares_burned)?;
        let reserve_common = self.reserve_common.safe_sub(&delta_common)?;
        let reserve_paired = self.reserve_paired.safe_sub(&delta_paired)?;
        check_emptiness(reserve_common, reserve_paired, share_supply)?;

        self.reserve_common = reserve_common;
        self.reserve_paired = reserve_paired;
        self.share_supply = share_supply;
        self.write_balance(holder, balance);
        Ok(())
    }

    /// Records a swap: the input reserve grows by `delta_in` and the output
    /// reserve shrinks by `delta_out`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if the pool holds no reserves.
    /// - [`AmmError::Overflow`] / [`AmmError::Underflow`] on reserve bounds.
    /// - [`AmmError::InconsistentReserves`] if the swap would drain the output
    ///   reserve to zero.
    pub fn apply_swap_delta(
        &mut self,
        delta_in: Amount,
        delta_out: Amount,
        direction: SwapDirection,
    ) -> Result<(), AmmError> {
        if self.is_empty() {
            return Err(AmmError::EmptyPool);
        }
        let (reserve_common, reserve_paired) = match direction {
            SwapDirection::CommonToPaired => (
                self.reserve_common.safe_add(&delta_in)?,
                self.reserve_paired.safe_sub(&delta_out)?,
            ),
            SwapDirection::PairedToCommon => (
                self.reserve_common.safe_sub(&delta_out)?,
                self.reserve_paired.safe_add(&delta_in)?,
            ),
        };
        check_emptiness(reserve_common, reserve_paired, self.share_supply)?;

        self.reserve_common = reserve_common;
        self.reserve_paired = reserve_paired;
        Ok(())
    }

    /// Moves `amount` shares from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `from` owns fewer than
    ///   `amount`.
    /// - [`AmmError::Overflow`] if `to`'s balance would exceed 256 bits.
    pub fn transfer_shares(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Shares,
    ) -> Result<(), AmmError> {
        let available = self.share_balance(&from);
        let from_balance = available
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientShares {
                requested: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let to_balance = self.share_balance(&to).safe_add(&amount)?;

        self.write_balance(from, from_balance);
        self.write_balance(to, to_balance);
        Ok(())
    }

    fn write_balance(&mut self, holder: AccountId, balance: Shares) {
        if balance.is_zero() {
            self.share_balances.remove(&holder);
        } else {
            self.share_balances.insert(holder, balance);
        }
    }
}

fn check_emptiness(common: Amount, paired: Amount, supply: Shares) -> Result<(), AmmError> {
    let all_zero = common.is_zero() && paired.is_zero() && supply.is_zero();
    let all_positive = !common.is_zero() && !paired.is_zero() && !supply.is_zero();
    if all_zero || all_positive {
        Ok(())
    } else {
        Err(AmmError::InconsistentReserves(
            "reserves and share supply must be all zero or all positive",
        ))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const ALICE: AccountId = AccountId::repeat_byte(0xa1);
    const BOB: AccountId = AccountId::repeat_byte(0xb0);

    fn seeded(common: u128, paired: u128) -> ReserveState {
        let mut state = ReserveState::new();
        let Ok(()) = state.apply_deposit(
            Amount::new(common),
            Amount::new(paired),
            Shares::new(common),
            ALICE,
        ) else {
            panic!("seed deposit");
        };
        state
    }

    // -- deposit --------------------------------------------------------------

    #[test]
    fn first_deposit_sets_reserves_and_supply() {
        let state = seeded(100, 200);
        assert_eq!(state.current_reserves(), (Amount::new(100), Amount::new(200)));
        assert_eq!(state.share_supply(), Shares::new(100));
        assert_eq!(state.share_balance(&ALICE), Shares::new(100));
        assert!(!state.is_empty());
    }

    #[test]
    fn one_sided_deposit_rejected_and_state_kept() {
        let mut state = ReserveState::new();
        let result = state.apply_deposit(Amount::new(10), Amount::ZERO, Shares::new(10), ALICE);
        assert!(matches!(result, Err(AmmError::InconsistentReserves(_))));
        assert_eq!(state, ReserveState::new());
    }

    #[test]
    fn deposit_overflow_leaves_state() {
        let mut state = seeded(100, 200);
        let before = state.clone();
        let result = state.apply_deposit(Amount::new(1), Amount::MAX, Shares::new(1), BOB);
        assert!(matches!(result, Err(AmmError::Overflow(_))));
        assert_eq!(state, before);
    }

    // -- withdrawal -----------------------------------------------------------

    #[test]
    fn partial_withdrawal() {
        let mut state = seeded(100, 200);
        let Ok(()) =
            state.apply_withdrawal(Shares::new(25), Amount::new(25), Amount::new(50), ALICE)
        else {
            panic!("expected Ok");
        };
        assert_eq!(state.current_reserves(), (Amount::new(75), Amount::new(150)));
        assert_eq!(state.share_supply(), Shares::new(75));
    }

    #[test]
    fn full_withdrawal_empties_pool() {
        let mut state = seeded(100, 200);
        let Ok(()) =
            state.apply_withdrawal(Shares::new(100), Amount::new(100), Amount::new(200), ALICE)
        else {
            panic!("expected Ok");
        };
        assert!(state.is_empty());
        assert!(state.share_balance(&ALICE).is_zero());
        assert_eq!(state, ReserveState::new());
    }

    #[test]
    fn withdrawal_beyond_balance() {
        let mut state = seeded(100, 200);
        let before = state.clone();
        let result = state.apply_withdrawal(Shares::new(1), Amount::new(1), Amount::new(2), BOB);
        let Err(AmmError::InsufficientShares {
            requested,
            available,
        }) = result
        else {
            panic!("expected InsufficientShares");
        };
        assert_eq!(requested, Shares::new(1));
        assert!(available.is_zero());
        assert_eq!(state, before);
    }

    // -- swap -----------------------------------------------------------------

    #[test]
    fn swap_delta_on_empty_pool() {
        let mut state = ReserveState::new();
        let result =
            state.apply_swap_delta(Amount::new(1), Amount::ZERO, SwapDirection::CommonToPaired);
        assert!(matches!(result, Err(AmmError::EmptyPool)));
    }

    #[test]
    fn swap_delta_moves_both_reserves() {
        let mut state = seeded(100, 200);
        let Ok(()) = state.apply_swap_delta(
            Amount::new(10),
            Amount::new(18),
            SwapDirection::CommonToPaired,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(state.current_reserves(), (Amount::new(110), Amount::new(182)));

        let Ok(()) = state.apply_swap_delta(
            Amount::new(18),
            Amount::new(9),
            SwapDirection::PairedToCommon,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(state.current_reserves(), (Amount::new(101), Amount::new(200)));
    }

    #[test]
    fn swap_delta_cannot_drain_reserve() {
        let mut state = seeded(100, 200);
        let before = state.clone();
        let result = state.apply_swap_delta(
            Amount::new(1),
            Amount::new(200),
            SwapDirection::CommonToPaired,
        );
        assert!(result.is_err());
        assert_eq!(state, before);
    }

    // -- share transfer -------------------------------------------------------

    #[test]
    fn transfer_shares_moves_balance() {
        let mut state = seeded(100, 200);
        let Ok(()) = state.transfer_shares(ALICE, BOB, Shares::new(40)) else {
            panic!("expected Ok");
        };
        assert_eq!(state.share_balance(&ALICE), Shares::new(60));
        assert_eq!(state.share_balance(&BOB), Shares::new(40));
        assert_eq!(state.share_supply(), Shares::new(100));
    }

    #[test]
    fn transfer_shares_insufficient() {
        let mut state = seeded(100, 200);
        let before = state.clone();
        let result = state.transfer_shares(BOB, ALICE, Shares::new(1));
        assert!(matches!(result, Err(AmmError::InsufficientShares { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn transfer_to_self_is_noop() {
        let mut state = seeded(100, 200);
        let before = state.clone();
        let Ok(()) = state.transfer_shares(ALICE, ALICE, Shares::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(state, before);
    }
}
