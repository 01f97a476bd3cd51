//! Configuration for a token/base-asset exchange.

use core::fmt;

use crate::domain::{Address, Token};
use crate::error::ExchangeError;

/// Immutable parameters of an [`Exchange`](crate::pools::Exchange).
///
/// The pool always starts empty; the first liquidity provider sets the
/// initial price, so no reserves are configured here.
///
/// # Validation
///
/// - The exchange address must not be the zero address.
/// - The token address must not be the zero address.
/// - The exchange and the token must have different addresses.
///
/// # Examples
///
/// ```
/// use token_exchange::config::ExchangeConfig;
/// use token_exchange::domain::{Address, Decimals, Token};
///
/// let token = Token::new(Address::from_bytes([1u8; 20]), Decimals::ETHER);
/// let cfg = ExchangeConfig::new(token, Address::from_bytes([2u8; 20]));
/// assert!(cfg.is_ok());
///
/// let clash = ExchangeConfig::new(token, Address::from_bytes([1u8; 20]));
/// assert!(clash.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    token: Token,
    exchange: Address,
}

impl ExchangeConfig {
    /// Creates a validated `ExchangeConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfiguration`] if any rule listed
    /// on the type is violated.
    pub fn new(token: Token, exchange: Address) -> Result<Self, ExchangeError> {
        let config = Self { token, exchange };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidConfiguration`] on the first
    /// violated rule.
    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.exchange.is_zero() {
            return Err(ExchangeError::InvalidConfiguration(
                "exchange address must not be zero",
            ));
        }
        if self.token.address().is_zero() {
            return Err(ExchangeError::InvalidConfiguration(
                "token address must not be zero",
            ));
        }
        if self.token.address() == self.exchange {
            return Err(ExchangeError::InvalidConfiguration(
                "exchange and token must have distinct addresses",
            ));
        }
        Ok(())
    }

    /// Returns the traded token.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Returns the exchange's own account address.
    #[must_use]
    pub const fn exchange(&self) -> Address {
        self.exchange
    }
}

impl fmt::Display for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExchangeConfig(token={}, decimals={}, exchange={})",
            self.token.address(),
            self.token.decimals().get(),
            self.exchange
        )
    }
}
