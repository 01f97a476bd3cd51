//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use token_exchange::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, Decimals, Shares, SwapDirection, SwapOutcome, Token, Withdrawal,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool, TokenLedger};

pub use crate::math::CheckedArithmetic;
pub use crate::math::units::{format_ether, format_units, parse_ether, parse_units};

pub use crate::config::ExchangeConfig;

pub use crate::error::{ExchangeError, Result, TransferError};

pub use crate::ledger::BalanceLedger;
pub use crate::pools::{Exchange, SharedExchange};
