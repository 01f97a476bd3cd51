//! Fee-less constant-product pricing.
//!
//! ```text
//! output = input × output_reserve / (input_reserve + input)
//! ```
//!
//! Division truncates, so `(x + Δx)(y − Δy) ≥ x·y` after every swap and
//! the output is always strictly below `output_reserve`.

use super::wide::{mul_div_wide, widen};
use crate::domain::Amount;
use crate::error::ExchangeError;

/// Quotes the output of selling `input_amount` into a pool holding
/// `input_reserve` of the input asset and `output_reserve` of the output
/// asset.
///
/// The denominator is formed in 256 bits so reserves near `u128::MAX`
/// cannot overflow it.
///
/// # Errors
///
/// - [`ExchangeError::InvalidAmount`] if `input_amount` is zero.
/// - [`ExchangeError::InsufficientLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use token_exchange::domain::Amount;
/// use token_exchange::math::quote_output;
///
/// // 2000 tokens / 1000 base: selling 1000 base yields exactly 1000 tokens.
/// let out = quote_output(Amount::new(1_000), Amount::new(2_000), Amount::new(1_000));
/// assert_eq!(out, Ok(Amount::new(1_000)));
/// ```
pub fn quote_output(
    input_reserve: Amount,
    output_reserve: Amount,
    input_amount: Amount,
) -> Result<Amount, ExchangeError> {
    if input_amount.is_zero() {
        return Err(ExchangeError::InvalidAmount("input amount must be positive"));
    }
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(ExchangeError::InsufficientLiquidity);
    }

    let denominator = widen(input_reserve) + widen(input_amount);
    mul_div_wide(input_amount, output_reserve, denominator)
}
