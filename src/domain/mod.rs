//! Fundamental domain value types used throughout the exchange.
//!
//! Amounts, liquidity shares, account addresses, token identity and
//! swap outcomes.  All types are small `Copy` newtypes or enums.

mod address;
mod amount;
mod decimals;
mod shares;
mod swap_result;
mod token;

pub use address::Address;
pub use amount::Amount;
pub use decimals::Decimals;
pub use shares::Shares;
pub use swap_result::{SwapDirection, SwapOutcome, Withdrawal};
pub use token::Token;
