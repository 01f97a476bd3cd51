//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning checked operations
//! on [`Amount`] and [`Shares`] into [`ExchangeError`] values, so pool code
//! can chain reserve updates with `?`.
//!
//! # Examples
//!
//! ```
//! use token_exchange::domain::Amount;
//! use token_exchange::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100).safe_add(&Amount::new(50), "reserve");
//! assert_eq!(reserve, Ok(Amount::new(150)));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::ExchangeError;

/// Fallible addition and subtraction.
///
/// No saturation: errors propagate instead.  The `context` string is
/// carried in the error to identify the failing quantity.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Overflow`] if the result is not representable.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, ExchangeError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, ExchangeError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, ExchangeError> {
        self.checked_add(other).ok_or(ExchangeError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, ExchangeError> {
        self.checked_sub(other).ok_or(ExchangeError::Underflow(context))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, ExchangeError> {
        self.checked_add(other).ok_or(ExchangeError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, ExchangeError> {
        self.checked_sub(other).ok_or(ExchangeError::Underflow(context))
    }
}
