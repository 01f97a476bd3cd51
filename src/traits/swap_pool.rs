//! Swap and quote operations.
//!
//! [`SwapPool`] covers the pricing half of a pool:
//!
//! 1. **Quote**: [`SwapPool::quote`] prices an input without touching state.
//! 2. **Execute**: [`SwapPool::swap`] moves both reserves atomically.
//! 3. **Inspect**: [`SwapPool::reserves`] returns `(token, base)`.
//!
//! # Product Invariant
//!
//! For every committed swap:
//!
//! ```text
//! reserve_token_after × reserve_base_after ≥ reserve_token_before × reserve_base_before
//! ```

use crate::domain::{Address, Amount, SwapDirection, SwapOutcome};
use crate::error::ExchangeError;

/// A pool that prices and executes swaps between its two assets.
///
/// # Errors
///
/// Common error variants:
///
/// - [`ExchangeError::InvalidAmount`] for zero input or zero output
/// - [`ExchangeError::InsufficientLiquidity`] for an empty pool
/// - [`ExchangeError::SlippageExceeded`] when the output is below the minimum
/// - [`ExchangeError::TransferFailed`] when the token ledger refuses a transfer
pub trait SwapPool {
    /// Quotes the output of selling `amount_in` in `direction`.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if `amount_in` is zero.
    /// - [`ExchangeError::InsufficientLiquidity`] if the pool is empty.
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, ExchangeError>;

    /// Sells `amount_in` for the other asset on behalf of `caller`.
    ///
    /// Either both reserves change and the token moves, or nothing changes.
    ///
    /// # Errors
    ///
    /// - Everything [`SwapPool::quote`] returns.
    /// - [`ExchangeError::SlippageExceeded`] if the output is below `min_output`.
    /// - [`ExchangeError::InvalidAmount`] if the output truncates to zero.
    /// - [`ExchangeError::TransferFailed`] if the token transfer fails.
    fn swap(
        &mut self,
        caller: Address,
        direction: SwapDirection,
        amount_in: Amount,
        min_output: Amount,
    ) -> Result<SwapOutcome, ExchangeError>;

    /// Returns `(reserve_token, reserve_base)`.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);
}
