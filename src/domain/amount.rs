//! Raw asset amount with checked arithmetic.

use core::fmt;

/// A quantity of either pool asset in its smallest unit (wei for the base
/// asset, the token's base unit otherwise).
///
/// `Amount` never interprets decimals; see [`units`](crate::math::units)
/// for conversion to and from human-readable strings.  Arithmetic is
/// checked and returns `None` instead of wrapping or panicking.  Products
/// of two amounts are formed in 256 bits by [`mul_div`](crate::math::mul_div).
///
/// # Examples
///
/// ```
/// use token_exchange::domain::Amount;
///
/// let reserve = Amount::new(2_000);
/// assert_eq!(reserve.checked_add(&Amount::new(1)), Some(Amount::new(2_001)));
/// assert_eq!(Amount::ZERO.checked_sub(&Amount::new(1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from raw units.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw unit count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
