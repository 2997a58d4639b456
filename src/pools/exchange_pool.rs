//! A single constant-product pool trading one paired asset against the
//! common asset.
//!
//! [`ExchangePool`] combines the reserve bookkeeping of [`ReserveState`]
//! with the pricing functions and drives the asset ledger for deposits,
//! withdrawals and single-pool swaps.
//!
//! # Atomicity
//!
//! Every mutating operation runs inside a [`LedgerJournal`] and against a
//! snapshot of the pool state.  On success the journal is committed; on
//! any error the snapshot is restored and the journal rolls the ledger
//! back, so the caller observes either the full effect or none of it.
//!
//! # Ordering
//!
//! Inbound pulls happen before the state is credited.  The state holds
//! its final values before any outbound push is issued.  Each operation
//! borrows the pool mutably for its whole duration, so nested entry into
//! the same pool is rejected at compile time.

use tracing::{debug, info, warn};

use super::pricing::{quote_swap, spot_price};
use super::reserve_state::ReserveState;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, FeeTier, Price, Shares, SwapDirection, SwapResult, Withdrawal,
};
use crate::error::AmmError;
use crate::ledger::LedgerJournal;
use crate::math::mul_div;
use crate::traits::AssetLedger;

/// A liquidity pool for one `(common, paired)` asset pair.
///
/// # Example
///
/// ```rust
/// use hooliswap::config::PoolConfig;
/// use hooliswap::domain::{AccountId, Amount, AssetId, Shares};
/// use hooliswap::ledger::InMemoryLedger;
/// use hooliswap::pools::ExchangePool;
///
/// let eth = AssetId::repeat_byte(0xee);
/// let tkn = AssetId::repeat_byte(0x01);
/// let alice = AccountId::repeat_byte(0xa1);
///
/// let mut pool = ExchangePool::new(eth, tkn, PoolConfig::default()).expect("distinct assets");
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(alice, eth, Amount::new(100)).expect("mint");
/// ledger.mint(alice, tkn, Amount::new(200)).expect("mint");
/// ledger.approve(alice, pool.account(), eth, Amount::new(100));
/// ledger.approve(alice, pool.account(), tkn, Amount::new(200));
///
/// let minted = pool
///     .deposit(&mut ledger, alice, Amount::new(200), Amount::new(100))
///     .expect("first deposit");
/// assert_eq!(minted, Shares::new(100));
/// assert_eq!(pool.reserves(), (Amount::new(100), Amount::new(200)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangePool {
    account: AccountId,
    common_asset: AssetId,
    paired_asset: AssetId,
    config: PoolConfig,
    state: ReserveState,
}

impl ExchangePool {
    /// Creates an empty pool.  Its custody account is derived from the
    /// paired asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `common_asset == paired_asset`.
    /// - Any error from [`PoolConfig::validate`].
    pub fn new(
        common_asset: AssetId,
        paired_asset: AssetId,
        config: PoolConfig,
    ) -> Result<Self, AmmError> {
        if common_asset == paired_asset {
            return Err(AmmError::InvalidAsset(
                "paired asset must differ from the common asset",
            ));
        }
        config.validate()?;
        Ok(Self {
            account: AccountId::pool_custody(&paired_asset),
            common_asset,
            paired_asset,
            config,
            state: ReserveState::new(),
        })
    }

    /// Ledger account holding the pool's reserves.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// The common asset.
    #[must_use]
    pub const fn common_asset(&self) -> AssetId {
        self.common_asset
    }

    /// The paired asset this pool is bound to.
    #[must_use]
    pub const fn paired_asset(&self) -> AssetId {
        self.paired_asset
    }

    /// Trading fee.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.config.fee()
    }

    /// Read-only view of reserves and shares.
    #[must_use]
    pub const fn state(&self) -> &ReserveState {
        &self.state
    }

    /// Returns `(reserve_common, reserve_paired)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        self.state.current_reserves()
    }

    /// Paired asset per unit of common asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::EmptyPool`] if the pool holds no reserves.
    pub fn spot_price(&self) -> Result<Price, AmmError> {
        let (common, paired) = self.reserves();
        spot_price(paired, common)
    }

    // -- share token ----------------------------------------------------------

    /// Share token name.
    #[must_use]
    pub fn share_name(&self) -> &str {
        self.config.share_name()
    }

    /// Share token symbol.
    #[must_use]
    pub fn share_symbol(&self) -> &str {
        self.config.share_symbol()
    }

    /// Shares held by `holder`.
    #[must_use]
    pub fn share_balance_of(&self, holder: AccountId) -> Shares {
        self.state.share_balance(&holder)
    }

    /// Total shares outstanding.
    #[must_use]
    pub const fn share_supply(&self) -> Shares {
        self.state.share_supply()
    }

    /// Moves `amount` shares from `from` to `to`.  Reserves are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `from` owns fewer than
    /// `amount`.
    pub fn transfer_shares(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Shares,
    ) -> Result<(), AmmError> {
        self.state.transfer_shares(from, to, amount)?;
        debug!(pool = %self.paired_asset, %from, %to, %amount, "shares transferred");
        Ok(())
    }

    // -- quotes ---------------------------------------------------------------

    /// Which way a swap selling `asset_in` runs through this pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if the pool does not trade
    /// `asset_in`.
    pub fn direction_for(&self, asset_in: AssetId) -> Result<SwapDirection, AmmError> {
        if asset_in == self.common_asset {
            Ok(SwapDirection::CommonToPaired)
        } else if asset_in == self.paired_asset {
            Ok(SwapDirection::PairedToCommon)
        } else {
            Err(AmmError::InvalidAsset("asset is not traded by this pool"))
        }
    }

    /// The asset a swap in `direction` pays out.
    #[must_use]
    pub const fn asset_out(&self, direction: SwapDirection) -> AssetId {
        match direction {
            SwapDirection::CommonToPaired => self.paired_asset,
            SwapDirection::PairedToCommon => self.common_asset,
        }
    }

    /// Full receipt for selling `amount_in` in `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] for a positive input against an empty pool.
    /// - [`AmmError::Overflow`] on 256-bit overflow.
    pub fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        let (common, paired) = self.reserves();
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::CommonToPaired => (common, paired),
            SwapDirection::PairedToCommon => (paired, common),
        };
        quote_swap(reserve_in, reserve_out, amount_in, self.fee())
    }

    /// Output of selling `amount_in` of `asset_in`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidAsset`] plus the errors of
    /// [`ExchangePool::quote_swap`].
    pub fn quote(&self, asset_in: AssetId, amount_in: Amount) -> Result<Amount, AmmError> {
        let direction = self.direction_for(asset_in)?;
        Ok(self.quote_swap(direction, amount_in)?.amount_out())
    }

    /// Paired asset received for `common_in`.
    ///
    /// # Errors
    ///
    /// Same as [`ExchangePool::quote_swap`].
    pub fn quote_paired_for_common(&self, common_in: Amount) -> Result<Amount, AmmError> {
        Ok(self
            .quote_swap(SwapDirection::CommonToPaired, common_in)?
            .amount_out())
    }

    /// Common asset received for `paired_in`.
    ///
    /// # Errors
    ///
    /// Same as [`ExchangePool::quote_swap`].
    pub fn quote_common_for_paired(&self, paired_in: Amount) -> Result<Amount, AmmError> {
        Ok(self
            .quote_swap(SwapDirection::PairedToCommon, paired_in)?
            .amount_out())
    }

    // -- liquidity ------------------------------------------------------------

    /// Deposits `common` and up to `paired_max` of the paired asset on
    /// behalf of `caller` and mints shares to them.
    ///
    /// - Empty pool: both amounts become the reserves and `common` shares
    ///   are minted.
    /// - Otherwise: `paired_required = common × reserve_paired /
    ///   reserve_common` is pulled and `common × supply / reserve_common`
    ///   shares are minted.
    /// - `common == 0` mints nothing and moves nothing.
    ///
    /// The caller must have approved [`ExchangePool::account`] for both
    /// assets.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientPairedAmount`] if `paired_max` is below
    ///   the required amount (or zero on a first deposit).
    /// - [`AmmError::TransferFailed`] if a pull is refused.
    /// - [`AmmError::Overflow`] on 256-bit overflow.
    pub fn deposit<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        paired_max: Amount,
        common: Amount,
    ) -> Result<Shares, AmmError> {
        if common.is_zero() {
            debug!(pool = %self.paired_asset, holder = %caller, "zero deposit ignored");
            return Ok(Shares::ZERO);
        }

        let (reserve_common, reserve_paired) = self.reserves();
        let (paired_amount, minted) = if self.state.is_empty() {
            if paired_max.is_zero() {
                return Err(AmmError::InsufficientPairedAmount {
                    required: Amount::new(1),
                    provided: paired_max,
                });
            }
            (paired_max, Shares::from_amount(common))
        } else {
            let paired_required = Amount::from_u256(mul_div(
                common.get(),
                reserve_paired.get(),
                reserve_common.get(),
                "paired requirement overflow",
            )?);
            if paired_max < paired_required {
                return Err(AmmError::InsufficientPairedAmount {
                    required: paired_required,
                    provided: paired_max,
                });
            }
            let minted = Shares::from_u256(mul_div(
                common.get(),
                self.share_supply().get(),
                reserve_common.get(),
                "share mint overflow",
            )?);
            (paired_required, minted)
        };

        let (pool, common_asset, paired_asset) =
            (self.account, self.common_asset, self.paired_asset);
        self.atomically(ledger, "deposit", |state, journal| {
            journal.pull(pool, caller, common_asset, common)?;
            journal.pull(pool, caller, paired_asset, paired_amount)?;
            state.apply_deposit(common, paired_amount, minted, caller)
        })?;

        info!(
            pool = %self.paired_asset,
            holder = %caller,
            %common,
            paired = %paired_amount,
            %minted,
            "liquidity added"
        );
        Ok(minted)
    }

    /// Burns `shares` held by `caller` and pays out the proportional slice
    /// of both reserves, truncated toward zero.
    ///
    /// Burning the whole supply empties the pool.  Zero shares is a no-op.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer than
    ///   `shares`.
    /// - [`AmmError::TransferFailed`] if a push is refused.
    pub fn withdraw<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        if shares.is_zero() {
            debug!(pool = %self.paired_asset, holder = %caller, "zero withdrawal ignored");
            return Ok(Withdrawal::default());
        }
        let available = self.share_balance_of(caller);
        if available < shares {
            return Err(AmmError::InsufficientShares {
                requested: shares,
                available,
            });
        }

        let (reserve_common, reserve_paired) = self.reserves();
        let supply = self.share_supply().get();
        let common_out = Amount::from_u256(mul_div(
            shares.get(),
            reserve_common.get(),
            supply,
            "common payout overflow",
        )?);
        let paired_out = Amount::from_u256(mul_div(
            shares.get(),
            reserve_paired.get(),
            supply,
            "paired payout overflow",
        )?);

        let (pool, common_asset, paired_asset) =
            (self.account, self.common_asset, self.paired_asset);
        self.atomically(ledger, "withdraw", |state, journal| {
            state.apply_withdrawal(shares, common_out, paired_out, caller)?;
            journal.push(pool, caller, common_asset, common_out)?;
            journal.push(pool, caller, paired_asset, paired_out)
        })?;

        info!(
            pool = %self.paired_asset,
            holder = %caller,
            burned = %shares,
            %common_out,
            %paired_out,
            "liquidity removed"
        );
        Ok(Withdrawal::new(common_out, paired_out))
    }

    // -- swaps ----------------------------------------------------------------

    /// Sells exactly `amount_in` of `asset_in` from `caller` and sends the
    /// output to `recipient`.
    ///
    /// A zero input returns a zero receipt without touching the ledger.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidRecipient`] if `recipient` is the pool's own
    ///   custody account.
    /// - [`AmmError::InvalidAsset`] if the pool does not trade `asset_in`.
    /// - [`AmmError::EmptyPool`] for a positive input against an empty pool.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`; nothing moves.
    /// - [`AmmError::TransferFailed`] if the pull or the push is refused.
    pub fn swap_exact_input<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        asset_in: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError> {
        if recipient == self.account {
            return Err(AmmError::InvalidRecipient(recipient));
        }
        let direction = self.direction_for(asset_in)?;
        let receipt = self.quote_swap(direction, amount_in)?;
        check_slippage(receipt.amount_out(), min_amount_out)?;
        if amount_in.is_zero() {
            return Ok(receipt);
        }

        let pool = self.account;
        let asset_out = self.asset_out(direction);
        self.atomically(ledger, "swap", |state, journal| {
            journal.pull(pool, caller, asset_in, amount_in)?;
            state.apply_swap_delta(receipt.amount_in(), receipt.amount_out(), direction)?;
            journal.push(pool, recipient, asset_out, receipt.amount_out())
        })?;

        info!(
            pool = %self.paired_asset,
            %direction,
            %caller,
            %recipient,
            amount_in = %receipt.amount_in(),
            amount_out = %receipt.amount_out(),
            fee = %receipt.fee(),
            "swap settled"
        );
        Ok(receipt)
    }

    /// Records a hop executed by the router.  The router moves the assets.
    pub(crate) fn settle_hop(
        &mut self,
        direction: SwapDirection,
        receipt: &SwapResult,
    ) -> Result<(), AmmError> {
        self.state
            .apply_swap_delta(receipt.amount_in(), receipt.amount_out(), direction)
    }

    pub(crate) fn restore(&mut self, snapshot: ReserveState) {
        self.state = snapshot;
    }

    fn atomically<L, T, F>(
        &mut self,
        ledger: &mut L,
        operation: &'static str,
        f: F,
    ) -> Result<T, AmmError>
    where
        L: AssetLedger,
        F: FnOnce(&mut ReserveState, &mut LedgerJournal<'_, L>) -> Result<T, AmmError>,
    {
        let snapshot = self.state.clone();
        let mut journal = LedgerJournal::begin(ledger);
        match f(&mut self.state, &mut journal) {
            Ok(value) => {
                journal.commit();
                Ok(value)
            }
            Err(err) => {
                self.state = snapshot;
                drop(journal);
                warn!(pool = %self.paired_asset, operation, error = %err, "operation reverted");
                Err(err)
            }
        }
    }
}

/// Fails with [`AmmError::SlippageExceeded`] when `amount_out < min_amount_out`.
pub(crate) fn check_slippage(amount_out: Amount, min_amount_out: Amount) -> Result<(), AmmError> {
    if amount_out < min_amount_out {
        return Err(AmmError::SlippageExceeded {
            amount_out,
            min_amount_out,
        });
    }
    Ok(())
}
