//! Construction from a validated configuration.
//!
//! Implementations **must** re-validate the configuration: a successfully
//! constructed pool is guaranteed to be in a valid initial state.

use crate::error::ExchangeError;

/// Builds a value from a configuration struct.
///
/// # Examples
///
/// ```
/// use token_exchange::config::ExchangeConfig;
/// use token_exchange::domain::{Address, Decimals, Token};
/// use token_exchange::ledger::BalanceLedger;
/// use token_exchange::pools::Exchange;
/// use token_exchange::traits::{FromConfig, LiquidityPool};
///
/// let token = Token::new(Address::from_bytes([1u8; 20]), Decimals::ETHER);
/// let cfg = ExchangeConfig::new(token, Address::from_bytes([2u8; 20])).expect("valid");
/// let pool: Exchange<BalanceLedger> = Exchange::from_config(&cfg).expect("built");
/// assert!(pool.total_shares().is_zero());
/// ```
pub trait FromConfig<C>: Sized {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfiguration`] if the configuration
    /// violates any invariant.
    fn from_config(config: &C) -> Result<Self, ExchangeError>;
}
