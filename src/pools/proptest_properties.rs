//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Product preservation**: `reserve_common × reserve_paired` strictly
//!    grows across every non-zero swap.
//! 2. **Liquidity round trip**: deposit into an empty pool then withdraw
//!    every share returns exactly the deposit.
//! 3. **Fee monotonicity**: the fee-charging quote is strictly below the
//!    fee-free quote.
//! 4. **Zero idempotence**: zero deposits, withdrawals and swaps change
//!    nothing.
//! 5. **Custody**: reserves equal the pool account's ledger balances after
//!    any operation sequence.
//! 6. **Swap reversibility**: a round-trip swap never returns more than
//!    was sold.

use alloy_primitives::U256;
use proptest::prelude::*;

use super::{quote_output, ExchangePool};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, FeeTier, Shares};
use crate::ledger::InMemoryLedger;
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ETH: AssetId = AssetId::repeat_byte(0xee);
const TKN: AssetId = AssetId::repeat_byte(0x01);
const PROVIDER: AccountId = AccountId::repeat_byte(0xa1);
const TRADER: AccountId = AccountId::repeat_byte(0xb0);
const E18: u128 = 1_000_000_000_000_000_000;

fn fund(ledger: &mut InMemoryLedger, pool: &ExchangePool, holder: AccountId, eth: u128, tkn: u128) {
    let Ok(()) = ledger.mint(holder, ETH, Amount::new(eth)) else {
        panic!("mint eth");
    };
    let Ok(()) = ledger.mint(holder, TKN, Amount::new(tkn)) else {
        panic!("mint tkn");
    };
    ledger.approve(holder, pool.account(), ETH, Amount::MAX);
    ledger.approve(holder, pool.account(), TKN, Amount::MAX);
}

fn empty_pool() -> ExchangePool {
    let Ok(pool) = ExchangePool::new(ETH, TKN, PoolConfig::default()) else {
        panic!("valid pool");
    };
    pool
}

/// A pool seeded by `PROVIDER` plus a ledger where `TRADER` holds a large
/// balance of both assets.
fn seeded(common: u128, paired: u128) -> (ExchangePool, InMemoryLedger) {
    let mut pool = empty_pool();
    let mut ledger = InMemoryLedger::new();
    fund(&mut ledger, &pool, PROVIDER, common, paired);
    fund(&mut ledger, &pool, TRADER, u64::MAX.into(), u64::MAX.into());
    let Ok(_) = pool.deposit(&mut ledger, PROVIDER, Amount::new(paired), Amount::new(common)) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn product(pool: &ExchangePool) -> U256 {
    let (common, paired) = pool.reserves();
    common.get() * paired.get()
}

fn custody_matches(pool: &ExchangePool, ledger: &InMemoryLedger) -> bool {
    let (common, paired) = pool.reserves();
    ledger.balance_of(pool.account(), ETH) == common
        && ledger.balance_of(pool.account(), TKN) == paired
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000] raw units.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Whole 18-decimal units in [1, 1_000_000].
fn wad_strategy() -> impl Strategy<Value = u128> {
    (1u128..=1_000_000u128).prop_map(|units| units * E18)
}

// ---------------------------------------------------------------------------
// Property 1: Product Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_grows_on_every_swap(
        rc in reserve_strategy(),
        rp in reserve_strategy(),
        amount_in in 1u128..=1_000_000u128,
        common_in in any::<bool>(),
    ) {
        let (mut pool, mut ledger) = seeded(rc, rp);
        let asset_in = if common_in { ETH } else { TKN };
        let k_before = product(&pool);

        let Ok(_) = pool.swap_exact_input(
            &mut ledger, TRADER, asset_in, Amount::new(amount_in), Amount::ZERO, TRADER,
        ) else {
            panic!("swap against seeded pool");
        };

        let k_after = product(&pool);
        prop_assert!(k_after > k_before, "k_after={} <= k_before={}", k_after, k_before);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Liquidity Round Trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_round_trip(
        common in wad_strategy(),
        paired in wad_strategy(),
    ) {
        let mut pool = empty_pool();
        let mut ledger = InMemoryLedger::new();
        fund(&mut ledger, &pool, PROVIDER, common, paired);

        let Ok(minted) =
            pool.deposit(&mut ledger, PROVIDER, Amount::new(paired), Amount::new(common))
        else {
            panic!("first deposit");
        };
        let Ok(out) = pool.withdraw(&mut ledger, PROVIDER, minted) else {
            panic!("full withdrawal");
        };

        prop_assert_eq!(out.into_parts(), (Amount::new(common), Amount::new(paired)));
        prop_assert!(pool.state().is_empty());
        prop_assert_eq!(ledger.balance_of(PROVIDER, ETH), Amount::new(common));
        prop_assert_eq!(ledger.balance_of(PROVIDER, TKN), Amount::new(paired));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fee_quote_below_fee_free(
        reserve_in in wad_strategy(),
        reserve_out in wad_strategy(),
        amount_in in wad_strategy(),
    ) {
        let (reserve_in, reserve_out, amount_in) =
            (Amount::new(reserve_in), Amount::new(reserve_out), Amount::new(amount_in));
        let Ok(with_fee) = quote_output(reserve_in, reserve_out, amount_in, FeeTier::ONE_PERCENT)
        else {
            panic!("quote with fee");
        };
        let Ok(fee_free) = quote_output(reserve_in, reserve_out, amount_in, FeeTier::FEE_FREE)
        else {
            panic!("fee-free quote");
        };
        prop_assert!(with_fee < fee_free, "with_fee={} >= fee_free={}", with_fee, fee_free);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Zero Idempotence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_zero_operations_change_nothing(
        rc in reserve_strategy(),
        rp in reserve_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(rc, rp);
        let before = pool.clone();
        let trader_eth = ledger.balance_of(TRADER, ETH);

        let Ok(minted) = pool.deposit(&mut ledger, TRADER, Amount::ZERO, Amount::ZERO) else {
            panic!("zero deposit");
        };
        prop_assert!(minted.is_zero());
        let Ok(out) = pool.withdraw(&mut ledger, PROVIDER, Shares::ZERO) else {
            panic!("zero withdrawal");
        };
        prop_assert_eq!(out.into_parts(), (Amount::ZERO, Amount::ZERO));
        let Ok(receipt) =
            pool.swap_exact_input(&mut ledger, TRADER, ETH, Amount::ZERO, Amount::ZERO, TRADER)
        else {
            panic!("zero swap");
        };
        prop_assert!(receipt.amount_out().is_zero());

        prop_assert_eq!(&pool, &before);
        prop_assert_eq!(ledger.balance_of(TRADER, ETH), trader_eth);
        prop_assert!(custody_matches(&pool, &ledger));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Custody
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_reserves_equal_custody(
        rc in reserve_strategy(),
        rp in reserve_strategy(),
        swaps in proptest::collection::vec((1u128..=100_000u128, any::<bool>()), 1..8),
        burn_percent in 0u128..=100u128,
    ) {
        let (mut pool, mut ledger) = seeded(rc, rp);

        for (amount_in, common_in) in swaps {
            let asset_in = if common_in { ETH } else { TKN };
            let Ok(_) = pool.swap_exact_input(
                &mut ledger, TRADER, asset_in, Amount::new(amount_in), Amount::ZERO, TRADER,
            ) else {
                panic!("swap against seeded pool");
            };
            prop_assert!(custody_matches(&pool, &ledger));
        }

        let held = pool.share_balance_of(PROVIDER).get();
        let burn = Shares::from_u256(held * U256::from(burn_percent) / U256::from(100u8));
        let Ok(_) = pool.withdraw(&mut ledger, PROVIDER, burn) else {
            panic!("withdrawal within balance");
        };
        prop_assert!(custody_matches(&pool, &ledger));
    }
}

// ---------------------------------------------------------------------------
// Property 6: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_swap_loses_value(
        rc in reserve_strategy(),
        rp in reserve_strategy(),
    ) {
        let swap_in = (rc / 1_000).max(1);
        let (mut pool, mut ledger) = seeded(rc, rp);

        let Ok(first) = pool.swap_exact_input(
            &mut ledger, TRADER, ETH, Amount::new(swap_in), Amount::ZERO, TRADER,
        ) else {
            panic!("common -> paired");
        };
        if first.amount_out().is_zero() { return Ok(()); }

        let Ok(second) = pool.swap_exact_input(
            &mut ledger, TRADER, TKN, first.amount_out(), Amount::ZERO, TRADER,
        ) else {
            panic!("paired -> common");
        };

        prop_assert!(
            second.amount_out() < Amount::new(swap_in),
            "round trip returned {} for {}",
            second.amount_out(), swap_in
        );
    }
}
