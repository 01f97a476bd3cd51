//! Liquidity management trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! Total shares **only** change through [`LiquidityPool::add_liquidity`]
//! and [`LiquidityPool::remove_liquidity`].  Swaps and share transfers
//! never alter the total, and at all times:
//!
//! ```text
//! total_shares = Σ shares_of(provider)   for all providers
//! ```
//!
//! The pool is either fully empty (`total_shares == 0` and both reserves
//! zero) or fully funded.

use super::SwapPool;
use crate::domain::{Address, Amount, Shares, Withdrawal};
use crate::error::ExchangeError;

/// A pool that accepts deposits against liquidity shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits tokens and attached base-asset value on behalf of `caller`.
    ///
    /// The first deposit into an empty pool sets the price and mints one
    /// share per base unit.  Later deposits consume exactly
    /// `base_amount × reserve_token / reserve_base` tokens and mint
    /// `total_shares × base_amount / reserve_base` shares.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if either amount is zero or the
    ///   deposit would mint no shares.
    /// - [`ExchangeError::RatioMismatch`] if `token_amount` is below the
    ///   ratio-required amount.
    /// - [`ExchangeError::TransferFailed`] if pulling the tokens fails.
    fn add_liquidity(
        &mut self,
        caller: Address,
        token_amount: Amount,
        base_amount: Amount,
    ) -> Result<Shares, ExchangeError>;

    /// Burns `shares` held by `caller` and pays out the proportional
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if `shares` is zero.
    /// - [`ExchangeError::InsufficientShares`] if `caller` holds fewer shares.
    /// - [`ExchangeError::TransferFailed`] if paying out tokens fails.
    fn remove_liquidity(
        &mut self,
        caller: Address,
        shares: Shares,
    ) -> Result<Withdrawal, ExchangeError>;

    /// Moves `shares` from `from` to `to` without touching reserves.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if `shares` is zero.
    /// - [`ExchangeError::InsufficientShares`] if `from` holds fewer shares.
    fn transfer_shares(
        &mut self,
        from: Address,
        to: Address,
        shares: Shares,
    ) -> Result<(), ExchangeError>;

    /// Returns the total outstanding shares.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Returns the shares held by `provider`.
    #[must_use]
    fn shares_of(&self, provider: &Address) -> Shares;
}
