//! Integration tests exercising the exchange through its public API.
//!
//! These tests follow a deployer who mints 1 000 000 tokens, approves the
//! exchange and seeds it, mirroring the lifecycle an on-chain exchange
//! goes through: seeding, quoting, trading and withdrawing.

#![allow(clippy::panic)]

use token_exchange::config::ExchangeConfig;
use token_exchange::domain::{Address, Amount, Decimals, Shares, SwapDirection, Token};
use token_exchange::error::{ExchangeError, TransferError};
use token_exchange::ledger::BalanceLedger;
use token_exchange::math::product;
use token_exchange::math::units::{format_ether, parse_ether};
use token_exchange::pools::{Exchange, SharedExchange};
use token_exchange::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TOKEN: Address = Address::from_bytes([0x70; 20]);
const EXCHANGE: Address = Address::from_bytes([0xee; 20]);
const DEPLOYER: Address = Address::from_bytes([0xde; 20]);
const TRADER: Address = Address::from_bytes([0x7a; 20]);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ether(value: &str) -> Amount {
    let Ok(amount) = parse_ether(value) else {
        panic!("invalid ether literal {value}");
    };
    amount
}

fn deployed() -> Exchange<BalanceLedger> {
    init_tracing();
    let mut ledger = BalanceLedger::new();
    ledger.mint(DEPLOYER, ether("1000000"));
    ledger.mint(TRADER, ether("10000"));
    ledger.approve(TRADER, EXCHANGE, ether("10000"));

    let Ok(config) = ExchangeConfig::new(Token::new(TOKEN, Decimals::ETHER), EXCHANGE) else {
        panic!("valid config");
    };
    let Ok(exchange) = Exchange::new(&config, ledger) else {
        panic!("exchange created");
    };
    exchange
}

fn seeded(token: &str, base: &str) -> Exchange<BalanceLedger> {
    let mut exchange = deployed();
    exchange
        .ledger_mut()
        .approve(DEPLOYER, EXCHANGE, ether(token));
    let Ok(_) = exchange.add_liquidity(DEPLOYER, ether(token), ether(base)) else {
        panic!("seed {token}/{base}");
    };
    exchange
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn exposes_token_address() {
    let exchange = deployed();
    assert_eq!(exchange.token_address(), TOKEN);
    assert_eq!(exchange.address(), EXCHANGE);
    assert!(exchange.is_empty());
}

#[test]
fn zero_exchange_address_rejected() {
    let token = Token::new(TOKEN, Decimals::ETHER);
    let Err(ExchangeError::InvalidConfiguration(_)) = ExchangeConfig::new(token, Address::ZERO)
    else {
        panic!("expected InvalidConfiguration");
    };
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

#[test]
fn seeding_sets_reserves() {
    let exchange = seeded("100", "1");
    assert_eq!(exchange.reserve(), ether("100"));
    assert_eq!(exchange.base_balance(), ether("1"));
    assert_eq!(exchange.ledger().balance_of(&EXCHANGE), ether("100"));
    assert_eq!(exchange.shares_of(&DEPLOYER), Shares::new(ether("1").get()));
}

#[test]
fn under_ratio_deposit_rejected() {
    let mut exchange = seeded("2000", "1000");
    exchange
        .ledger_mut()
        .approve(DEPLOYER, EXCHANGE, ether("1000"));
    let before = exchange.clone();

    // 100 base requires 200 tokens at the 2:1 ratio.
    let Err(ExchangeError::RatioMismatch { supplied, required }) =
        exchange.add_liquidity(DEPLOYER, ether("199"), ether("100"))
    else {
        panic!("expected RatioMismatch");
    };
    assert_eq!(supplied, ether("199"));
    assert_eq!(required, ether("200"));
    assert_eq!(exchange, before);
}

#[test]
fn sole_provider_withdraws_everything() {
    let mut exchange = seeded("2000", "1000");
    let shares = exchange.shares_of(&DEPLOYER);
    let Ok(withdrawal) = exchange.remove_liquidity(DEPLOYER, shares) else {
        panic!("withdrawal");
    };
    assert_eq!(withdrawal.token_out, ether("2000"));
    assert_eq!(withdrawal.base_out, ether("1000"));
    assert!(exchange.is_empty());
    assert_eq!(exchange.reserves(), (Amount::ZERO, Amount::ZERO));
    assert_eq!(exchange.total_shares(), Shares::ZERO);
    assert_eq!(exchange.ledger().balance_of(&DEPLOYER), ether("1000000"));
}

#[test]
fn second_provider_shares_trading_gains() {
    let mut exchange = seeded("2000", "1000");
    let Ok(minted) = exchange.add_liquidity(TRADER, ether("200"), ether("100")) else {
        panic!("second deposit");
    };
    assert_eq!(minted, Shares::new(ether("100").get()));

    let Ok(_) = exchange.swap_base_for_token(DEPLOYER, ether("10"), Amount::ZERO) else {
        panic!("swap");
    };
    let Ok(withdrawal) = exchange.remove_liquidity(TRADER, minted) else {
        panic!("withdrawal");
    };
    // 1/11 of the pool after 10 base came in.
    assert!(withdrawal.base_out > ether("100"));
    assert!(withdrawal.token_out < ether("200"));
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[test]
fn token_amount_quotes() {
    let exchange = seeded("2000", "1000");
    let quote = |v: &str| {
        let Ok(out) = exchange.get_token_amount(ether(v)) else {
            panic!("quote {v}");
        };
        format_ether(out)
    };
    assert_eq!(quote("1"), "1.998001998001998001");
    assert_eq!(quote("100"), "181.818181818181818181");
    assert_eq!(quote("1000"), "1000.0");
}

#[test]
fn eth_amount_quotes() {
    let exchange = seeded("2000", "1000");
    let quote = |v: &str| {
        let Ok(out) = exchange.get_eth_amount(ether(v)) else {
            panic!("quote {v}");
        };
        format_ether(out)
    };
    assert_eq!(quote("2"), "0.999000999000999");
    assert_eq!(quote("100"), "47.619047619047619047");
    assert_eq!(quote("2000"), "500.0");
}

#[test]
fn quotes_on_empty_pool_fail() {
    let exchange = deployed();
    assert_eq!(
        exchange.get_token_amount(ether("1")),
        Err(ExchangeError::InsufficientLiquidity)
    );
    assert_eq!(
        exchange.get_eth_amount(ether("1")),
        Err(ExchangeError::InsufficientLiquidity)
    );
}

// ---------------------------------------------------------------------------
// Trading lifecycle
// ---------------------------------------------------------------------------

#[test]
fn swap_executes_at_quoted_price() {
    let mut exchange = seeded("2000", "1000");
    let Ok(quoted) = exchange.get_token_amount(ether("1")) else {
        panic!("quote");
    };
    let Ok(outcome) = exchange.swap_base_for_token(TRADER, ether("1"), quoted) else {
        panic!("swap");
    };
    assert_eq!(outcome.amount_out(), quoted);
    assert_eq!(outcome.direction(), SwapDirection::BaseToToken);
    assert_eq!(
        exchange.ledger().balance_of(&TRADER),
        ether("10000").checked_add(&quoted).unwrap_or(Amount::MAX)
    );
    assert_eq!(exchange.reserve(), ether("2000").checked_sub(&quoted).unwrap_or(Amount::ZERO));
    assert_eq!(exchange.base_balance(), ether("1001"));
}

#[test]
fn stale_quote_hits_slippage_guard() {
    let mut exchange = seeded("2000", "1000");
    let Ok(quoted) = exchange.get_eth_amount(ether("100")) else {
        panic!("quote");
    };
    // Another trader moves the price first.
    let Ok(_) = exchange.swap_token_for_base(TRADER, ether("100"), Amount::ZERO) else {
        panic!("front-run");
    };
    let before = exchange.clone();
    let Err(ExchangeError::SlippageExceeded { output, min_output }) =
        exchange.swap_token_for_base(TRADER, ether("100"), quoted)
    else {
        panic!("expected SlippageExceeded");
    };
    assert!(output < min_output);
    assert_eq!(exchange, before);
}

#[test]
fn token_sale_without_approval_fails_cleanly() {
    let mut exchange = seeded("2000", "1000");
    let stranger = Address::from_bytes([0x55; 20]);
    exchange.ledger_mut().mint(stranger, ether("50"));
    let before = exchange.clone();
    assert_eq!(
        exchange.swap_token_for_base(stranger, ether("50"), Amount::ZERO),
        Err(ExchangeError::TransferFailed(
            TransferError::InsufficientAllowance {
                requested: ether("50"),
                approved: Amount::ZERO,
            }
        ))
    );
    assert_eq!(exchange, before);
}

#[test]
fn round_trip_trading_keeps_product() {
    let mut exchange = seeded("2000", "1000");
    let (t0, b0) = exchange.reserves();
    for _ in 0..5 {
        let Ok(bought) = exchange.swap_base_for_token(TRADER, ether("3"), Amount::ZERO) else {
            panic!("buy");
        };
        let Ok(_) = exchange.swap_token_for_base(TRADER, bought.amount_out(), Amount::ZERO) else {
            panic!("sell");
        };
    }
    let (t1, b1) = exchange.reserves();
    assert!(product(t1, b1) >= product(t0, b0));
    assert_eq!(exchange.ledger().balance_of(&EXCHANGE), t1);
}

// ---------------------------------------------------------------------------
// Generic use through the pool traits
// ---------------------------------------------------------------------------

fn deposit_and_trade<P: LiquidityPool>(pool: &mut P) -> (Shares, Amount) {
    let Ok(shares) = pool.add_liquidity(TRADER, ether("2000"), ether("1000")) else {
        panic!("deposit");
    };
    let Ok(outcome) = pool.swap(TRADER, SwapDirection::TokenToBase, ether("2000"), Amount::ZERO)
    else {
        panic!("swap");
    };
    (shares, outcome.amount_out())
}

#[test]
fn owned_and_shared_exchanges_agree() {
    let mut owned = deployed();
    let mut shared = SharedExchange::new(deployed());

    let a = deposit_and_trade(&mut owned);
    let b = deposit_and_trade(&mut shared);
    assert_eq!(a, b);
    assert_eq!(a.1, ether("500"));
    assert_eq!(owned.reserves(), shared.reserves());
    assert_eq!(owned.total_shares(), shared.total_shares());
}
