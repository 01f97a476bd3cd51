//! Core trait abstractions.
//!
//! [`SwapPool`] for pricing and swaps, [`LiquidityPool`] for deposits and
//! withdrawals, [`FromConfig`] for configuration-driven construction, and
//! [`TokenLedger`] for the external token-transfer collaborator.

mod from_config;
mod liquidity_pool;
mod swap_pool;
mod token_ledger;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use token_ledger::TokenLedger;
