//! # Token Exchange
//!
//! A constant-product exchange between one fungible token and a native
//! base asset.
//!
//! Liquidity providers deposit both assets and receive shares
//! proportional to their contribution; traders swap one asset for the
//! other along `reserve_token × reserve_base = k`, with no fee.  Token
//! movements go through an external [`TokenLedger`](traits::TokenLedger);
//! the base asset is carried as value attached to calls and returned in
//! their results.
//!
//! ## Seed a pool and swap
//!
//! ```rust
//! use token_exchange::prelude::*;
//!
//! let token = Token::new(Address::from_bytes([1u8; 20]), Decimals::ETHER);
//! let pool_addr = Address::from_bytes([2u8; 20]);
//! let alice = Address::from_bytes([3u8; 20]);
//!
//! let mut ledger = BalanceLedger::new();
//! ledger.mint(alice, parse_ether("2000").expect("units"));
//! ledger.approve(alice, pool_addr, parse_ether("2000").expect("units"));
//!
//! let config = ExchangeConfig::new(token, pool_addr).expect("valid config");
//! let mut pool = Exchange::new(&config, ledger).expect("pool created");
//!
//! let tokens = parse_ether("2000").expect("units");
//! let base = parse_ether("1000").expect("units");
//! let shares = pool.add_liquidity(alice, tokens, base).expect("seeded");
//! assert_eq!(format_ether(Amount::new(shares.get())), "1000.0");
//!
//! let out = pool
//!     .swap_base_for_token(alice, parse_ether("1").expect("units"), Amount::ZERO)
//!     .expect("swap");
//! assert_eq!(format_ether(out.amount_out()), "1.998001998001998001");
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Address`](domain::Address), [`Token`](domain::Token) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`TokenLedger`](traits::TokenLedger), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`pools`]  | [`Exchange`](pools::Exchange) and the thread-safe [`SharedExchange`](pools::SharedExchange) |
//! | [`ledger`] | In-memory [`BalanceLedger`](ledger::BalanceLedger) |
//! | [`math`]   | Pricing formula, wide arithmetic, unit conversion |
//! | [`error`]  | [`ExchangeError`](error::ExchangeError) and [`TransferError`](error::TransferError) |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
