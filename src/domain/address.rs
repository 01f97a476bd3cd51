//! Account identifier.

use core::fmt;

/// A 20-byte account identifier used for liquidity providers, swappers,
/// the exchange itself and the token it trades.
///
/// All byte sequences are valid, so construction is infallible.  The
/// zero address is reserved as a sentinel and is rejected by
/// [`ExchangeConfig`](crate::config::ExchangeConfig).
///
/// # Examples
///
/// ```
/// use token_exchange::domain::Address;
///
/// let alice = Address::from_bytes([0xa1; 20]);
/// assert_eq!(alice.as_bytes(), [0xa1; 20]);
/// assert!(!alice.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
