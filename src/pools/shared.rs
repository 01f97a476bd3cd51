//! Thread-safe handle to an [`Exchange`].
//!
//! All state of an exchange sits behind one `RwLock`: quotes and reads
//! take the read side, every mutating operation takes the write side for
//! its whole duration (including the ledger call), so no two operations
//! ever interleave their reserve reads and writes.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::Exchange;
use crate::domain::{Address, Amount, Shares, SwapDirection, SwapOutcome, Withdrawal};
use crate::error::ExchangeError;
use crate::traits::{LiquidityPool, SwapPool, TokenLedger};

/// Cloneable, shareable exchange handle.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use token_exchange::config::ExchangeConfig;
/// use token_exchange::domain::{Address, Amount, Decimals, Token};
/// use token_exchange::ledger::BalanceLedger;
/// use token_exchange::pools::{Exchange, SharedExchange};
/// use token_exchange::traits::{LiquidityPool, SwapPool};
///
/// let token = Token::new(Address::from_bytes([1u8; 20]), Decimals::ETHER);
/// let pool_addr = Address::from_bytes([2u8; 20]);
/// let lp = Address::from_bytes([3u8; 20]);
///
/// let mut ledger = BalanceLedger::new();
/// ledger.mint(lp, Amount::new(2_000));
/// ledger.approve(lp, pool_addr, Amount::new(2_000));
/// let cfg = ExchangeConfig::new(token, pool_addr).expect("valid");
/// let shared = SharedExchange::new(Exchange::new(&cfg, ledger).expect("pool"));
///
/// let mut writer = shared.clone();
/// thread::spawn(move || writer.add_liquidity(lp, Amount::new(2_000), Amount::new(1_000)))
///     .join()
///     .expect("thread")
///     .expect("deposit");
///
/// assert_eq!(shared.reserves(), (Amount::new(2_000), Amount::new(1_000)));
/// ```
#[derive(Debug)]
pub struct SharedExchange<L> {
    inner: Arc<RwLock<Exchange<L>>>,
}

impl<L> Clone for SharedExchange<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: TokenLedger> SharedExchange<L> {
    /// Wraps `exchange` for shared use.
    #[must_use]
    pub fn new(exchange: Exchange<L>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(exchange)),
        }
    }

    /// Locks the exchange for reading.
    ///
    /// Holding the guard blocks all mutating operations.
    pub fn read(&self) -> RwLockReadGuard<'_, Exchange<L>> {
        self.inner.read()
    }

    /// Runs `f` with exclusive access to the exchange.
    pub fn with_exchange<R>(&self, f: impl FnOnce(&mut Exchange<L>) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Quotes the tokens received for selling `base_in`.
    ///
    /// # Errors
    ///
    /// See [`Exchange::get_token_amount`].
    pub fn get_token_amount(&self, base_in: Amount) -> Result<Amount, ExchangeError> {
        self.inner.read().get_token_amount(base_in)
    }

    /// Quotes the base asset received for selling `token_in`.
    ///
    /// # Errors
    ///
    /// See [`Exchange::get_eth_amount`].
    pub fn get_eth_amount(&self, token_in: Amount) -> Result<Amount, ExchangeError> {
        self.inner.read().get_eth_amount(token_in)
    }
}

impl<L: TokenLedger> SwapPool for SharedExchange<L> {
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, ExchangeError> {
        self.inner.read().quote(direction, amount_in)
    }

    fn swap(
        &mut self,
        caller: Address,
        direction: SwapDirection,
        amount_in: Amount,
        min_output: Amount,
    ) -> Result<SwapOutcome, ExchangeError> {
        self.inner
            .write()
            .swap(caller, direction, amount_in, min_output)
    }

    fn reserves(&self) -> (Amount, Amount) {
        self.inner.read().reserves()
    }
}

impl<L: TokenLedger> LiquidityPool for SharedExchange<L> {
    fn add_liquidity(
        &mut self,
        caller: Address,
        token_amount: Amount,
        base_amount: Amount,
    ) -> Result<Shares, ExchangeError> {
        self.inner
            .write()
            .add_liquidity(caller, token_amount, base_amount)
    }

    fn remove_liquidity(
        &mut self,
        caller: Address,
        shares: Shares,
    ) -> Result<Withdrawal, ExchangeError> {
        self.inner.write().remove_liquidity(caller, shares)
    }

    fn transfer_shares(
        &mut self,
        from: Address,
        to: Address,
        shares: Shares,
    ) -> Result<(), ExchangeError> {
        self.inner.write().transfer_shares(from, to, shares)
    }

    fn total_shares(&self) -> Shares {
        self.inner.read().total_shares()
    }

    fn shares_of(&self, provider: &Address) -> Shares {
        self.inner.read().shares_of(provider)
    }
}
