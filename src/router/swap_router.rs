//! Exact-input swaps across one or two pools.

use tracing::{debug, info, warn};

use crate::domain::{AccountId, Amount, AssetId, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::ledger::LedgerJournal;
use crate::pools::{check_slippage, ReserveState};
use crate::traits::{AssetLedger, PoolRegistry};

/// Route a swap takes through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// One pool, keyed by its paired asset.
    Single {
        paired: AssetId,
        direction: SwapDirection,
    },
    /// Paired A → common through the first pool, then common → paired B
    /// through the second.
    TwoHop {
        paired_in: AssetId,
        paired_out: AssetId,
    },
}

/// Executes exact-input swaps between any two registered assets.
///
/// - If either side is the common asset the swap runs through a single
///   pool.
/// - Two distinct paired assets route through the common asset: the
///   first pool sells the input for common, and the second sells that
///   common for the output.  Only the final output is checked against
///   the caller's minimum, and the whole route settles or reverts as one.
///
/// The router borrows the registry and the ledger for its lifetime.
///
/// # Example
///
/// ```rust
/// use hooliswap::config::PoolConfig;
/// use hooliswap::domain::{AccountId, Amount, AssetId};
/// use hooliswap::factory::PoolFactory;
/// use hooliswap::ledger::InMemoryLedger;
/// use hooliswap::router::SwapRouter;
/// use hooliswap::traits::{AssetLedger, PoolRegistry};
///
/// let eth = AssetId::repeat_byte(0xee);
/// let tkn = AssetId::repeat_byte(0x01);
/// let lp = AccountId::repeat_byte(0xa1);
/// let trader = AccountId::repeat_byte(0xb0);
///
/// let mut factory = PoolFactory::new(eth, PoolConfig::default());
/// let pool = factory.create_pool(tkn).expect("new pool");
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(lp, eth, Amount::new(1_000)).expect("mint");
/// ledger.mint(lp, tkn, Amount::new(2_000)).expect("mint");
/// ledger.mint(trader, eth, Amount::new(100)).expect("mint");
/// ledger.approve(lp, pool, eth, Amount::new(1_000));
/// ledger.approve(lp, pool, tkn, Amount::new(2_000));
/// ledger.approve(trader, pool, eth, Amount::new(100));
///
/// factory
///     .resolve_pool_mut(&tkn)
///     .and_then(|p| p.deposit(&mut ledger, lp, Amount::new(2_000), Amount::new(1_000)))
///     .expect("seed liquidity");
///
/// let mut router = SwapRouter::new(&mut factory, &mut ledger);
/// let receipt = router
///     .swap_exact_input(trader, eth, tkn, Amount::new(100), Amount::new(150), trader)
///     .expect("swap");
/// assert_eq!(receipt.amount_out(), Amount::new(180));
/// assert_eq!(ledger.balance_of(trader, tkn), Amount::new(180));
/// ```
pub struct SwapRouter<'a, R, L> {
    registry: &'a mut R,
    ledger: &'a mut L,
}

impl<'a, R: PoolRegistry, L: AssetLedger> SwapRouter<'a, R, L> {
    /// Borrows `registry` and `ledger` for routing.
    pub fn new(registry: &'a mut R, ledger: &'a mut L) -> Self {
        Self { registry, ledger }
    }

    /// Output of selling `amount_in` of `asset_in` for `asset_out`,
    /// without changing any state.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in == asset_out`.
    /// - [`AmmError::NoSuchPool`] if a required pool is not registered.
    /// - [`AmmError::EmptyPool`] for a positive input through an empty
    ///   pool.
    pub fn quote(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, AmmError> {
        let route = self.route(asset_in, asset_out)?;
        Ok(self.quote_route(route, amount_in)?.1.amount_out())
    }

    /// Sells exactly `amount_in` of `asset_in` from `caller` and sends at
    /// least `min_amount_out` of `asset_out` to `recipient`.
    ///
    /// The receipt carries the caller's input, the final output and the
    /// fee kept by the pool the input entered.  A zero input is a no-op
    /// returning a zero receipt.
    ///
    /// # Errors
    ///
    /// - Any error of [`SwapRouter::quote`].
    /// - [`AmmError::InvalidRecipient`] if `recipient` is the custody
    ///   account of a pool on the route.
    /// - [`AmmError::SlippageExceeded`] if the final output is below
    ///   `min_amount_out`; nothing moves.
    /// - [`AmmError::TransferFailed`] if any ledger transfer is refused;
    ///   every pool and balance is restored.
    pub fn swap_exact_input(
        &mut self,
        caller: AccountId,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError> {
        match self.route(asset_in, asset_out)? {
            Route::Single { paired, .. } => {
                self.registry.resolve_pool_mut(&paired)?.swap_exact_input(
                    &mut *self.ledger,
                    caller,
                    asset_in,
                    amount_in,
                    min_amount_out,
                    recipient,
                )
            }
            Route::TwoHop {
                paired_in,
                paired_out,
            } => self.swap_two_hop(
                caller,
                paired_in,
                paired_out,
                amount_in,
                min_amount_out,
                recipient,
            ),
        }
    }

    fn route(&self, asset_in: AssetId, asset_out: AssetId) -> Result<Route, AmmError> {
        if asset_in == asset_out {
            return Err(AmmError::InvalidAsset("input and output assets are the same"));
        }
        let common = self.registry.common_asset();
        let route = if asset_in == common {
            Route::Single {
                paired: asset_out,
                direction: SwapDirection::CommonToPaired,
            }
        } else if asset_out == common {
            Route::Single {
                paired: asset_in,
                direction: SwapDirection::PairedToCommon,
            }
        } else {
            Route::TwoHop {
                paired_in: asset_in,
                paired_out: asset_out,
            }
        };
        Ok(route)
    }

    /// Returns the first-hop receipt and the final receipt.  For a single
    /// hop both are the same.
    fn quote_route(
        &self,
        route: Route,
        amount_in: Amount,
    ) -> Result<(SwapResult, SwapResult), AmmError> {
        match route {
            Route::Single { paired, direction } => {
                let receipt = self
                    .registry
                    .resolve_pool(&paired)?
                    .quote_swap(direction, amount_in)?;
                Ok((receipt, receipt))
            }
            Route::TwoHop {
                paired_in,
                paired_out,
            } => {
                let first = self.registry.resolve_pool(&paired_in)?;
                let second = self.registry.resolve_pool(&paired_out)?;
                let hop_in = first.quote_swap(SwapDirection::PairedToCommon, amount_in)?;
                let hop_out =
                    second.quote_swap(SwapDirection::CommonToPaired, hop_in.amount_out())?;
                debug!(
                    %paired_in,
                    %paired_out,
                    %amount_in,
                    common = %hop_in.amount_out(),
                    amount_out = %hop_out.amount_out(),
                    "quoted two-hop route"
                );
                Ok((hop_in, hop_out))
            }
        }
    }

    fn swap_two_hop(
        &mut self,
        caller: AccountId,
        paired_in: AssetId,
        paired_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError> {
        for paired in [paired_in, paired_out] {
            if self.registry.resolve_pool(&paired)?.account() == recipient {
                return Err(AmmError::InvalidRecipient(recipient));
            }
        }
        let route = Route::TwoHop {
            paired_in,
            paired_out,
        };
        let (hop_in, hop_out) = self.quote_route(route, amount_in)?;
        check_slippage(hop_out.amount_out(), min_amount_out)?;
        let receipt = SwapResult::new(amount_in, hop_out.amount_out(), hop_in.fee())?;
        if amount_in.is_zero() {
            return Ok(receipt);
        }

        let snapshot_in = self.registry.resolve_pool(&paired_in)?.state().clone();
        let snapshot_out = self.registry.resolve_pool(&paired_out)?.state().clone();

        let mut journal = LedgerJournal::begin(&mut *self.ledger);
        let settled = settle_two_hop(
            &mut *self.registry,
            &mut journal,
            caller,
            recipient,
            (paired_in, &hop_in),
            (paired_out, &hop_out),
        );
        match settled {
            Ok(()) => {
                journal.commit();
                info!(
                    %caller,
                    %recipient,
                    %paired_in,
                    %paired_out,
                    %amount_in,
                    common = %hop_in.amount_out(),
                    amount_out = %hop_out.amount_out(),
                    "two-hop swap settled"
                );
                Ok(receipt)
            }
            Err(err) => {
                drop(journal);
                restore(&mut *self.registry, &paired_in, snapshot_in);
                restore(&mut *self.registry, &paired_out, snapshot_out);
                warn!(%paired_in, %paired_out, error = %err, "two-hop swap reverted");
                Err(err)
            }
        }
    }
}

/// Moves the assets of a two-hop swap and records each hop on its pool.
///
/// Each pool's reserves are updated before the assets leave it.
fn settle_two_hop<R: PoolRegistry, L: AssetLedger>(
    registry: &mut R,
    journal: &mut LedgerJournal<'_, L>,
    caller: AccountId,
    recipient: AccountId,
    (paired_in, hop_in): (AssetId, &SwapResult),
    (paired_out, hop_out): (AssetId, &SwapResult),
) -> Result<(), AmmError> {
    let common = registry.common_asset();
    let second_account = registry.resolve_pool(&paired_out)?.account();

    let first = registry.resolve_pool_mut(&paired_in)?;
    let first_account = first.account();
    journal.pull(first_account, caller, paired_in, hop_in.amount_in())?;
    first.settle_hop(SwapDirection::PairedToCommon, hop_in)?;
    journal.push(first_account, second_account, common, hop_in.amount_out())?;

    let second = registry.resolve_pool_mut(&paired_out)?;
    second.settle_hop(SwapDirection::CommonToPaired, hop_out)?;
    journal.push(second_account, recipient, paired_out, hop_out.amount_out())
}

fn restore<R: PoolRegistry>(registry: &mut R, paired: &AssetId, snapshot: ReserveState) {
    if let Ok(pool) = registry.resolve_pool_mut(paired) {
        pool.restore(snapshot);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::factory::PoolFactory;
    use crate::ledger::InMemoryLedger;

    const ETH: AssetId = AssetId::repeat_byte(0xee);
    const TKN: AssetId = AssetId::repeat_byte(0x01);
    const DAI: AssetId = AssetId::repeat_byte(0x02);
    const LP: AccountId = AccountId::repeat_byte(0xa1);
    const TRADER: AccountId = AccountId::repeat_byte(0xb0);

    // -- helpers --------------------------------------------------------------

    fn seed(
        factory: &mut PoolFactory,
        ledger: &mut InMemoryLedger,
        paired: AssetId,
        common: u128,
        paired_amount: u128,
    ) {
        let Ok(account) = factory.create_pool(paired) else {
            panic!("create pool");
        };
        let (Ok(()), Ok(())) = (
            ledger.mint(LP, ETH, Amount::new(common)),
            ledger.mint(LP, paired, Amount::new(paired_amount)),
        ) else {
            panic!("mint");
        };
        ledger.approve(LP, account, ETH, Amount::new(common));
        ledger.approve(LP, account, paired, Amount::new(paired_amount));
        let Ok(pool) = factory.resolve_pool_mut(&paired) else {
            panic!("resolve");
        };
        let Ok(_) = pool.deposit(ledger, LP, Amount::new(paired_amount), Amount::new(common)) else {
            panic!("seed deposit");
        };
    }

    fn market() -> (PoolFactory, InMemoryLedger) {
        let mut factory = PoolFactory::new(ETH, PoolConfig::default());
        let mut ledger = InMemoryLedger::new();
        seed(&mut factory, &mut ledger, TKN, 1_000_000, 2_000_000);
        seed(&mut factory, &mut ledger, DAI, 1_000_000, 3_000_000);
        (factory, ledger)
    }

    fn give(
        ledger: &mut InMemoryLedger,
        factory: &PoolFactory,
        asset: AssetId,
        pool_of: AssetId,
        amount: u128,
    ) {
        let Ok(()) = ledger.mint(TRADER, asset, Amount::new(amount)) else {
            panic!("mint");
        };
        let Some(account) = factory.pool_account(&pool_of) else {
            panic!("pool exists");
        };
        ledger.approve(TRADER, account, asset, Amount::new(amount));
    }

    // -- routing --------------------------------------------------------------

    #[test]
    fn same_asset_rejected() {
        let (mut factory, mut ledger) = market();
        let router = SwapRouter::new(&mut factory, &mut ledger);
        assert!(matches!(
            router.quote(TKN, TKN, Amount::new(1)),
            Err(AmmError::InvalidAsset(_))
        ));
    }

    #[test]
    fn unknown_pool() {
        let (mut factory, mut ledger) = market();
        let unknown = AssetId::repeat_byte(0x77);
        let router = SwapRouter::new(&mut factory, &mut ledger);
        assert!(matches!(
            router.quote(ETH, unknown, Amount::new(1)),
            Err(AmmError::NoSuchPool(a)) if a == unknown
        ));
        assert!(matches!(
            router.quote(TKN, unknown, Amount::new(1)),
            Err(AmmError::NoSuchPool(_))
        ));
    }

    #[test]
    fn single_hop_quote_matches_pool() {
        let (mut factory, mut ledger) = market();
        let Ok(direct) = factory
            .resolve_pool(&TKN)
            .and_then(|pool| pool.quote(ETH, Amount::new(1_000)))
        else {
            panic!("pool quote");
        };
        let router = SwapRouter::new(&mut factory, &mut ledger);
        let Ok(routed) = router.quote(ETH, TKN, Amount::new(1_000)) else {
            panic!("router quote");
        };
        assert_eq!(routed, direct);
    }

    // -- two hops -------------------------------------------------------------

    #[test]
    fn two_hop_quote_chains_pools() {
        let (mut factory, mut ledger) = market();
        let Ok(common) = factory
            .resolve_pool(&TKN)
            .and_then(|pool| pool.quote_common_for_paired(Amount::new(10_000)))
        else {
            panic!("hop one");
        };
        let Ok(expected) = factory
            .resolve_pool(&DAI)
            .and_then(|pool| pool.quote_paired_for_common(common))
        else {
            panic!("hop two");
        };
        let router = SwapRouter::new(&mut factory, &mut ledger);
        let Ok(quoted) = router.quote(TKN, DAI, Amount::new(10_000)) else {
            panic!("router quote");
        };
        assert_eq!(quoted, expected);
    }

    #[test]
    fn two_hop_swap_settles_both_pools() {
        let (mut factory, mut ledger) = market();
        give(&mut ledger, &factory, TKN, TKN, 10_000);
        let Ok(expected) =
            SwapRouter::new(&mut factory, &mut ledger).quote(TKN, DAI, Amount::new(10_000))
        else {
            panic!("quote");
        };

        let mut router = SwapRouter::new(&mut factory, &mut ledger);
        let Ok(receipt) =
            router.swap_exact_input(TRADER, TKN, DAI, Amount::new(10_000), expected, TRADER)
        else {
            panic!("two-hop swap");
        };
        assert_eq!(receipt.amount_out(), expected);
        assert_eq!(ledger.balance_of(TRADER, DAI), expected);
        assert!(ledger.balance_of(TRADER, TKN).is_zero());

        for paired in [TKN, DAI] {
            let Ok(pool) = factory.resolve_pool(&paired) else {
                panic!("pool");
            };
            let (common, paired_reserve) = pool.reserves();
            assert_eq!(ledger.balance_of(pool.account(), ETH), common);
            assert_eq!(ledger.balance_of(pool.account(), paired), paired_reserve);
        }
    }

    #[test]
    fn two_hop_slippage_reverts_nothing_moved() {
        let (mut factory, mut ledger) = market();
        give(&mut ledger, &factory, TKN, TKN, 10_000);
        let before = (
            factory.resolve_pool(&TKN).map(|p| p.reserves()),
            factory.resolve_pool(&DAI).map(|p| p.reserves()),
        );

        let mut router = SwapRouter::new(&mut factory, &mut ledger);
        let result = router.swap_exact_input(
            TRADER,
            TKN,
            DAI,
            Amount::new(10_000),
            Amount::new(1_000_000),
            TRADER,
        );
        assert!(matches!(result, Err(AmmError::SlippageExceeded { .. })));

        let after = (
            factory.resolve_pool(&TKN).map(|p| p.reserves()),
            factory.resolve_pool(&DAI).map(|p| p.reserves()),
        );
        assert_eq!(before, after);
        assert_eq!(ledger.balance_of(TRADER, TKN), Amount::new(10_000));
    }

    #[test]
    fn second_hop_against_empty_pool_fails_before_transfers() {
        let mut factory = PoolFactory::new(ETH, PoolConfig::default());
        let mut ledger = InMemoryLedger::new();
        seed(&mut factory, &mut ledger, TKN, 1_000_000, 2_000_000);
        let Ok(_) = factory.create_pool(DAI) else {
            panic!("create pool");
        };
        give(&mut ledger, &factory, TKN, TKN, 10_000);

        let mut router = SwapRouter::new(&mut factory, &mut ledger);
        let result =
            router.swap_exact_input(TRADER, TKN, DAI, Amount::new(10_000), Amount::ZERO, TRADER);
        assert!(matches!(result, Err(AmmError::EmptyPool)));
        assert_eq!(ledger.balance_of(TRADER, TKN), Amount::new(10_000));
    }

    #[test]
    fn zero_input_two_hop() {
        let (mut factory, mut ledger) = market();
        let mut router = SwapRouter::new(&mut factory, &mut ledger);
        let Ok(receipt) =
            router.swap_exact_input(TRADER, TKN, DAI, Amount::ZERO, Amount::ZERO, TRADER)
        else {
            panic!("zero swap");
        };
        assert_eq!(receipt, SwapResult::zero());
        let result =
            router.swap_exact_input(TRADER, TKN, DAI, Amount::ZERO, Amount::new(1), TRADER);
        assert!(matches!(result, Err(AmmError::SlippageExceeded { .. })));
    }

    #[test]
    fn missing_allowance_reverts_two_hop() {
        let (mut factory, mut ledger) = market();
        let Ok(()) = ledger.mint(TRADER, TKN, Amount::new(10_000)) else {
            panic!("mint");
        };
        let before = factory.resolve_pool(&TKN).map(|p| p.reserves());

        let mut router = SwapRouter::new(&mut factory, &mut ledger);
        let result =
            router.swap_exact_input(TRADER, TKN, DAI, Amount::new(10_000), Amount::ZERO, TRADER);
        assert!(matches!(result, Err(AmmError::TransferFailed(_))));
        assert_eq!(factory.resolve_pool(&TKN).map(|p| p.reserves()), before);
        assert_eq!(ledger.balance_of(TRADER, TKN), Amount::new(10_000));
    }

    #[test]
    fn two_hop_to_pool_account_rejected() {
        let (mut factory, mut ledger) = market();
        give(&mut ledger, &factory, TKN, TKN, 10_000);
        let before = (
            factory.resolve_pool(&TKN).map(|p| p.reserves()),
            factory.resolve_pool(&DAI).map(|p| p.reserves()),
        );

        for paired in [TKN, DAI] {
            let Some(pool_account) = factory.pool_account(&paired) else {
                panic!("pool exists");
            };
            let mut router = SwapRouter::new(&mut factory, &mut ledger);
            let result = router.swap_exact_input(
                TRADER,
                TKN,
                DAI,
                Amount::new(10_000),
                Amount::ZERO,
                pool_account,
            );
            assert!(matches!(
                result,
                Err(AmmError::InvalidRecipient(account)) if account == pool_account
            ));
        }

        let after = (
            factory.resolve_pool(&TKN).map(|p| p.reserves()),
            factory.resolve_pool(&DAI).map(|p| p.reserves()),
        );
        assert_eq!(before, after);
        assert_eq!(ledger.balance_of(TRADER, TKN), Amount::new(10_000));
    }
}
