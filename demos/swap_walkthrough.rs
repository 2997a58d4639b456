//! Exchange walkthrough.
//!
//! Creates two pools against a common asset, provides liquidity, runs a
//! single-pool swap, a swap paid to another account and a two-hop swap,
//! then withdraws.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hooliswap=debug cargo run --example swap_walkthrough
//! ```

use hooliswap::config::PoolConfig;
use hooliswap::domain::{AccountId, Amount, AssetId};
use hooliswap::factory::PoolFactory;
use hooliswap::ledger::InMemoryLedger;
use hooliswap::router::SwapRouter;
use hooliswap::traits::{AssetLedger, PoolRegistry};
use tracing::Level;
use tracing_subscriber::EnvFilter;

const POOL_CONFIG: &str = r#"
share_name = "Hooliswap-V1"
share_symbol = "HOOLI-V1"

[fee]
numerator = 99
denominator = 100
"#;

fn units(whole: u128) -> Result<Amount, Box<dyn std::error::Error>> {
    Ok(Amount::checked_from_units(whole, 18).ok_or("amount out of range")?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    println!("=== Hooliswap walkthrough ===\n");

    // ── 1. Assets and accounts ──────────────────────────────────────────
    let eth = AssetId::repeat_byte(0xee);
    let tkn = AssetId::repeat_byte(0x01);
    let dai = AssetId::repeat_byte(0x02);
    let provider = AccountId::repeat_byte(0xa1);
    let trader = AccountId::repeat_byte(0xb0);
    let friend = AccountId::repeat_byte(0xc0);

    // ── 2. Factory from TOML, one pool per paired asset ─────────────────
    let config = PoolConfig::from_toml_str(POOL_CONFIG)?;
    println!("Fee tier:   {}", config.fee());
    let mut factory = PoolFactory::new(eth, config);
    let tkn_pool = factory.create_pool(tkn)?;
    let dai_pool = factory.create_pool(dai)?;
    println!("TKN pool:   {tkn_pool}");
    println!("DAI pool:   {dai_pool}");

    // ── 3. Provide liquidity ────────────────────────────────────────────
    let mut ledger = InMemoryLedger::new();
    for (paired, account, paired_amount) in [(tkn, tkn_pool, 2_000), (dai, dai_pool, 3_000)] {
        let common = units(1_000)?;
        let paired_amount = units(paired_amount)?;
        ledger.mint(provider, eth, common)?;
        ledger.mint(provider, paired, paired_amount)?;
        ledger.approve(provider, account, eth, common);
        ledger.approve(provider, account, paired, paired_amount);

        let pool = factory.resolve_pool_mut(&paired)?;
        let minted = pool.deposit(&mut ledger, provider, paired_amount, common)?;
        println!(
            "\nDeposited into {} pool: {minted} {} minted",
            pool.paired_asset(),
            pool.share_symbol()
        );
        println!("  Spot price: {} paired per common", pool.spot_price()?);
    }

    // ── 4. Single-pool swap: ETH → TKN ──────────────────────────────────
    ledger.mint(trader, eth, units(10)?)?;
    ledger.approve(trader, tkn_pool, eth, units(10)?);
    ledger.mint(trader, tkn, units(50)?)?;
    ledger.approve(trader, tkn_pool, tkn, units(50)?);

    let mut router = SwapRouter::new(&mut factory, &mut ledger);
    let quoted = router.quote(eth, tkn, units(1)?)?;
    let receipt = router.swap_exact_input(trader, eth, tkn, units(1)?, quoted, trader)?;
    println!("\n--- Swap 1 ETH for TKN ---");
    println!("  {receipt}");
    println!("  Effective price: {}", receipt.effective_price()?);

    // ── 5. Swap paid to another account ─────────────────────────────────
    let receipt = router.swap_exact_input(trader, eth, tkn, units(1)?, Amount::ZERO, friend)?;
    println!("\n--- Swap 1 ETH for TKN, paid to {friend} ---");
    println!("  {receipt}");

    // ── 6. Two-hop swap: TKN → ETH → DAI ────────────────────────────────
    let quoted = router.quote(tkn, dai, units(50)?)?;
    let receipt = router.swap_exact_input(trader, tkn, dai, units(50)?, quoted, trader)?;
    println!("\n--- Swap 50 TKN for DAI through ETH ---");
    println!("  {receipt}");

    // ── 7. Slippage protection ──────────────────────────────────────────
    match router.swap_exact_input(trader, eth, tkn, units(1)?, units(100)?, trader) {
        Ok(_) => println!("\nUnexpected fill"),
        Err(err) => println!("\nRejected as expected: {err}"),
    }

    // ── 8. Withdraw everything ──────────────────────────────────────────
    let pool = factory.resolve_pool_mut(&tkn)?;
    let shares = pool.share_balance_of(provider);
    let out = pool.withdraw(&mut ledger, provider, shares)?;
    println!("\nWithdrew {shares} shares from TKN pool: {out}");

    println!("\n--- Final balances ---");
    for (label, account) in [("trader", trader), ("friend", friend), ("provider", provider)] {
        println!(
            "  {label:<9} ETH {:>26}  TKN {:>26}  DAI {:>26}",
            ledger.balance_of(account, eth),
            ledger.balance_of(account, tkn),
            ledger.balance_of(account, dai),
        );
    }

    Ok(())
}
