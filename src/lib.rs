//! # Hooliswap
//!
//! Constant-product exchange core: liquidity pools that each trade one
//! *paired* asset against a shared *common* asset, priced only by their
//! reserve ratio plus a fixed trading fee.
//!
//! The crate provides:
//!
//! - **Pricing**: the fee-adjusted `x × y = k` output formula and an
//!   informational spot price.
//! - **Liquidity**: proportional share issuance on deposit and
//!   proportional redemption on withdrawal.
//! - **Routing**: single-pool swaps and two-pool hops
//!   (paired A → common → paired B) with slippage protection.
//! - **Atomicity**: every operation either fully settles or leaves
//!   reserves, shares and ledger balances exactly as they were.
//!
//! Assets move through an injected [`AssetLedger`](traits::AssetLedger)
//! and pools are found through an injected
//! [`PoolRegistry`](traits::PoolRegistry).  In-memory implementations of
//! both ship with the crate.
//!
//! # Quick Start
//!
//! ```rust
//! use hooliswap::prelude::*;
//!
//! let eth = AssetId::repeat_byte(0xee);
//! let tkn = AssetId::repeat_byte(0x01);
//! let dai = AssetId::repeat_byte(0x02);
//! let lp = AccountId::repeat_byte(0xa1);
//! let trader = AccountId::repeat_byte(0xb0);
//!
//! // 1. One factory, one pool per paired asset
//! let mut factory = PoolFactory::new(eth, PoolConfig::default());
//! let mut ledger = InMemoryLedger::new();
//!
//! // 2. Seed both pools
//! for (paired, amount) in [(tkn, 2_000u128), (dai, 3_000u128)] {
//!     let pool = factory.create_pool(paired).expect("new pool");
//!     ledger.mint(lp, eth, Amount::new(1_000)).expect("mint");
//!     ledger.mint(lp, paired, Amount::new(amount)).expect("mint");
//!     ledger.approve(lp, pool, eth, Amount::new(1_000));
//!     ledger.approve(lp, pool, paired, Amount::new(amount));
//!     factory
//!         .resolve_pool_mut(&paired)
//!         .and_then(|p| p.deposit(&mut ledger, lp, Amount::new(amount), Amount::new(1_000)))
//!         .expect("seed liquidity");
//! }
//!
//! // 3. Sell TKN for DAI through the common asset
//! let tkn_pool = factory.pool_account(&tkn).expect("registered");
//! ledger.mint(trader, tkn, Amount::new(100)).expect("mint");
//! ledger.approve(trader, tkn_pool, tkn, Amount::new(100));
//!
//! let mut router = SwapRouter::new(&mut factory, &mut ledger);
//! let quoted = router.quote(tkn, dai, Amount::new(100)).expect("quote");
//! let receipt = router
//!     .swap_exact_input(trader, tkn, dai, Amount::new(100), quoted, trader)
//!     .expect("two-hop swap");
//!
//! assert_eq!(receipt.amount_out(), quoted);
//! assert_eq!(ledger.balance_of(trader, dai), quoted);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  deposit / withdraw / swap_exact_input / quote
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐      ┌──────────────┐
//! │  SwapRouter   │ ───▶ │ PoolRegistry  │  PoolFactory
//! └──────┬───────┘      └──────────────┘
//!        ▼
//! ┌──────────────┐      ┌──────────────┐
//! │ ExchangePool  │ ───▶ │ LedgerJournal │ ──▶ AssetLedger
//! └──────┬───────┘      └──────────────┘
//!        ▼
//! ┌──────────────┐
//! │ ReserveState  │  reserves, share supply, share balances
//! │ pricing       │  quote_output, spot_price
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetId`](domain::AssetId), [`FeeTier`](domain::FeeTier), etc. |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`PoolRegistry`](traits::PoolRegistry) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): fee tier and share token metadata |
//! | [`pools`]  | [`ExchangePool`](pools::ExchangePool), [`ReserveState`](pools::ReserveState) and the pricing functions |
//! | [`router`] | [`SwapRouter`](router::SwapRouter) for single-pool and two-hop swaps |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory), the in-memory registry |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) and [`LedgerJournal`](ledger::LedgerJournal) |
//! | [`math`]   | Checked arithmetic and `mul_div` |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;
