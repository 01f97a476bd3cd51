//! Identity of the traded token.

use super::{Address, Decimals};

/// The fungible token an exchange trades against the base asset.
///
/// # Examples
///
/// ```
/// use token_exchange::domain::{Address, Decimals, Token};
///
/// let tkn = Token::new(Address::from_bytes([7u8; 20]), Decimals::ETHER);
/// assert_eq!(tkn.decimals().get(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    address: Address,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: Address, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token's address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the token's decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}
