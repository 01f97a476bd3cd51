//! 256-bit intermediates for products of two amounts.
//!
//! Reserves are `u128`, but `reserve × amount` routinely exceeds `u128`
//! once amounts carry 18 decimals (`2000e18 × 1000e18 ≈ 2e42`).  Every
//! product is therefore formed in [`U256`], divided there, and narrowed
//! back with an explicit overflow check.
//!
//! Every quotient truncates toward zero, so rounding remainders always
//! stay inside the pool.
//!
//! # Examples
//!
//! ```
//! use token_exchange::domain::Amount;
//! use token_exchange::math::mul_div;
//!
//! let e18 = 1_000_000_000_000_000_000u128;
//! let out = mul_div(Amount::new(2_000 * e18), Amount::new(e18), Amount::new(1_001 * e18));
//! assert_eq!(out, Ok(Amount::new(1_998_001_998_001_998_001)));
//! ```

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::manual_div_ceil)]

use crate::domain::Amount;
use crate::error::ExchangeError;

#[allow(missing_docs, unsafe_code)]
mod construct {
    uint::construct_uint! {
        /// 256-bit unsigned integer with four 64-bit limbs.
        pub struct U256(4);
    }
}

pub use construct::U256;

/// Widens an amount to 256 bits.
#[inline]
#[must_use]
pub fn widen(value: Amount) -> U256 {
    U256::from(value.get())
}

/// Narrows a 256-bit value back into an [`Amount`].
///
/// # Errors
///
/// Returns [`ExchangeError::Overflow`] if `value` does not fit in `u128`.
pub fn narrow(value: U256, context: &'static str) -> Result<Amount, ExchangeError> {
    if value > U256::from(u128::MAX) {
        return Err(ExchangeError::Overflow(context));
    }
    Ok(Amount::new(value.as_u128()))
}

/// Computes `⌊a × b / denominator⌋` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`ExchangeError::DivisionByZero`] if `denominator` is zero.
/// - [`ExchangeError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: Amount, b: Amount, denominator: Amount) -> Result<Amount, ExchangeError> {
    mul_div_wide(a, b, widen(denominator))
}

/// Like [`mul_div`] but with a denominator that may itself exceed `u128`.
///
/// # Errors
///
/// Same as [`mul_div`].
pub fn mul_div_wide(a: Amount, b: Amount, denominator: U256) -> Result<Amount, ExchangeError> {
    if denominator.is_zero() {
        return Err(ExchangeError::DivisionByZero);
    }
    // (2^128 - 1)^2 < 2^256, so the product never overflows.
    narrow(widen(a) * widen(b) / denominator, "mul_div quotient exceeds u128")
}

/// Returns the pool invariant `k = x × y` in 256 bits.
#[must_use]
pub fn product(x: Amount, y: Amount) -> U256 {
    widen(x) * widen(y)
}
