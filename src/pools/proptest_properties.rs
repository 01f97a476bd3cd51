//! Property-based tests using `proptest` for exchange invariants.
//!
//! 1. **Bounded output**: a quote never reaches the output reserve.
//! 2. **Monotonic product**: `k` never decreases across a swap.
//! 3. **Proportional minting**: shares track the base deposit ratio.
//! 4. **State invariants**: empty ⇔ zero reserves ⇔ zero shares, and the
//!    share ledger sums to the total, after any operation sequence.
//! 5. **Round-trip loss**: swapping there and back never gains value.
//! 6. **Withdrawal conservation**: depositing then withdrawing never
//!    returns more than was put in.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::ExchangeConfig;
use crate::domain::{Address, Amount, Decimals, Shares, SwapDirection, Token};
use crate::error::ExchangeError;
use crate::ledger::BalanceLedger;
use crate::math::{mul_div, product, quote_output};
use crate::pools::Exchange;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const POOL: Address = Address::from_bytes([0xee; 20]);
const FUNDING: u128 = u128::MAX / 4;

fn account(i: u8) -> Address {
    Address::from_bytes([i + 1; 20])
}

fn make_pool(accounts: u8) -> Exchange<BalanceLedger> {
    let token = Token::new(Address::from_bytes([0x70; 20]), Decimals::ETHER);
    let Ok(cfg) = ExchangeConfig::new(token, POOL) else {
        panic!("valid config");
    };
    let mut ledger = BalanceLedger::new();
    for i in 0..accounts {
        ledger.mint(account(i), Amount::new(FUNDING));
        ledger.approve(account(i), POOL, Amount::new(FUNDING));
    }
    let Ok(pool) = Exchange::new(&cfg, ledger) else {
        panic!("valid pool");
    };
    pool
}

fn seeded(token: u128, base: u128) -> Exchange<BalanceLedger> {
    let mut pool = make_pool(4);
    let Ok(_) = pool.add_liquidity(account(0), Amount::new(token), Amount::new(base)) else {
        panic!("seed");
    };
    pool
}

fn check_invariants(pool: &Exchange<BalanceLedger>) -> Result<(), TestCaseError> {
    let (t, b) = pool.reserves();
    let total = pool.total_shares();
    prop_assert_eq!(t.is_zero(), b.is_zero());
    prop_assert_eq!(b.is_zero(), total.is_zero());
    prop_assert_eq!(pool.providers().next().is_none(), total.is_zero());
    let sum: u128 = pool.providers().map(|(_, s)| s.get()).sum();
    prop_assert_eq!(sum, total.get());
    prop_assert_eq!(pool.ledger().balance_of(&POOL), t);
    Ok(())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves between 1 and 10^30 raw units (up to 10^12 whole 18-decimal units).
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, base: u128, extra_token: u128 },
    Remove { who: u8, permille: u16 },
    Swap { who: u8, direction: SwapDirection, amount: u128 },
    Move { from: u8, to: u8, permille: u16 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let direction = prop_oneof![
        Just(SwapDirection::BaseToToken),
        Just(SwapDirection::TokenToBase)
    ];
    prop_oneof![
        (0u8..4, 1u128..1_000_000_000_000u128, 0u128..1_000u128)
            .prop_map(|(who, base, extra_token)| Op::Add { who, base, extra_token }),
        (0u8..4, 1u16..=1_000).prop_map(|(who, permille)| Op::Remove { who, permille }),
        (0u8..4, direction, 1u128..1_000_000_000_000u128)
            .prop_map(|(who, direction, amount)| Op::Swap { who, direction, amount }),
        (0u8..4, 0u8..4, 1u16..=1_000).prop_map(|(from, to, permille)| Op::Move {
            from,
            to,
            permille
        }),
    ]
}

fn fraction(shares: Shares, permille: u16) -> Shares {
    let p = u128::from(permille);
    Shares::new(shares.get() / 1_000 * p + shares.get() % 1_000 * p / 1_000)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_below_reserve(
        input_reserve in reserve_strategy(),
        output_reserve in reserve_strategy(),
        input in 1u128..=u128::MAX,
    ) {
        let Ok(out) = quote_output(
            Amount::new(input_reserve),
            Amount::new(output_reserve),
            Amount::new(input),
        ) else {
            return Err(TestCaseError::fail("quote failed on funded reserves"));
        };
        prop_assert!(out.get() < output_reserve);
    }

    #[test]
    fn prop_swap_never_decreases_product(
        token in reserve_strategy(),
        base in reserve_strategy(),
        amount in 1u128..1_000_000_000_000_000_000_000u128,
        sell_token in any::<bool>(),
    ) {
        let mut pool = seeded(token, base);
        let (t0, b0) = pool.reserves();
        let direction = if sell_token {
            SwapDirection::TokenToBase
        } else {
            SwapDirection::BaseToToken
        };
        match pool.swap(account(1), direction, Amount::new(amount), Amount::ZERO) {
            Ok(outcome) => {
                let (t1, b1) = pool.reserves();
                prop_assert!(product(t1, b1) >= product(t0, b0));
                prop_assert!(!outcome.amount_out().is_zero());
            }
            Err(ExchangeError::InvalidAmount(_)) => {
                prop_assert_eq!(pool.reserves(), (t0, b0));
            }
            Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
        check_invariants(&pool)?;
    }

    #[test]
    fn prop_minting_is_proportional(
        token in 1_000u128..1_000_000_000_000_000u128,
        base in 1_000u128..1_000_000_000_000_000u128,
        deposit in 1u128..1_000_000_000_000_000u128,
    ) {
        let mut pool = seeded(token, base);
        let total_before = pool.total_shares();
        // Offer more tokens than any ratio could demand.
        match pool.add_liquidity(account(1), Amount::new(FUNDING / 2), Amount::new(deposit)) {
            Ok(minted) => {
                let expected = mul_div(
                    Amount::new(total_before.get()),
                    Amount::new(deposit),
                    Amount::new(base),
                );
                prop_assert_eq!(expected, Ok(Amount::new(minted.get())));
                prop_assert_eq!(pool.shares_of(&account(1)), minted);
            }
            Err(ExchangeError::InvalidAmount(_)) => {
                prop_assert_eq!(pool.total_shares(), total_before);
            }
            Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
        check_invariants(&pool)?;
    }

    #[test]
    fn prop_invariants_hold_for_any_sequence(
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = make_pool(4);
        for op in ops {
            let (t0, b0) = pool.reserves();
            let result = match op {
                Op::Add { who, base, extra_token } => {
                    let token = if pool.is_empty() {
                        base.saturating_mul(2)
                    } else {
                        mul_div(Amount::new(base), t0, b0)
                            .map_or(0, |required| required.get())
                            + extra_token
                    };
                    pool.add_liquidity(account(who), Amount::new(token.max(1)), Amount::new(base))
                        .map(|_| ())
                }
                Op::Remove { who, permille } => {
                    let held = pool.shares_of(&account(who));
                    pool.remove_liquidity(account(who), fraction(held, permille)).map(|_| ())
                }
                Op::Swap { who, direction, amount } => pool
                    .swap(account(who), direction, Amount::new(amount), Amount::ZERO)
                    .map(|_| ()),
                Op::Move { from, to, permille } => {
                    let held = pool.shares_of(&account(from));
                    pool.transfer_shares(account(from), account(to), fraction(held, permille))
                }
            };
            if let Err(e) = result {
                prop_assert!(
                    matches!(
                        e,
                        ExchangeError::InvalidAmount(_)
                            | ExchangeError::InsufficientLiquidity
                            | ExchangeError::RatioMismatch { .. }
                    ),
                    "unexpected error: {}",
                    e
                );
                prop_assert_eq!(pool.reserves(), (t0, b0));
            }
            check_invariants(&pool)?;
        }
    }

    #[test]
    fn prop_round_trip_loses_value(
        token in 1_000_000u128..1_000_000_000_000_000_000_000u128,
        base in 1_000_000u128..1_000_000_000_000_000_000_000u128,
        amount in 1u128..1_000_000_000_000_000_000u128,
    ) {
        let mut pool = seeded(token, base);
        let trader = account(1);
        let Ok(there) = pool.swap_base_for_token(trader, Amount::new(amount), Amount::ZERO) else {
            return Ok(());
        };
        let Ok(back) = pool.swap_token_for_base(trader, there.amount_out(), Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(back.amount_out().get() <= amount);
    }

    #[test]
    fn prop_deposit_withdraw_never_profits(
        token in 1_000u128..1_000_000_000_000_000u128,
        base in 1_000u128..1_000_000_000_000_000u128,
        deposit in 1u128..1_000_000_000_000_000u128,
    ) {
        let mut pool = seeded(token, base);
        let lp = account(2);
        let balance_before = pool.ledger().balance_of(&lp);
        let offered = Amount::new(FUNDING / 2);
        let Ok(minted) = pool.add_liquidity(lp, offered, Amount::new(deposit)) else {
            return Ok(());
        };
        let Ok(w) = pool.remove_liquidity(lp, minted) else {
            return Err(TestCaseError::fail("withdrawal of freshly minted shares failed"));
        };
        prop_assert!(w.base_out.get() <= deposit);
        prop_assert!(pool.ledger().balance_of(&lp) <= balance_before);
        check_invariants(&pool)?;
    }
}
