//! Conversion between decimal strings and raw units.
//!
//! Formatting trims trailing fractional zeros but always keeps at least one
//! fractional digit, so `1000 × 10^18` raw units at 18 decimals render as
//! `"1000.0"` and `999000999000999000` as `"0.999000999000999"`.

use crate::domain::{Amount, Decimals};
use crate::error::ExchangeError;

/// Parses a non-negative decimal string into raw units.
///
/// Accepts `"123"` and `"123.456"`.  Signs, exponents, whitespace and
/// separators are rejected.
///
/// # Errors
///
/// Returns [`ExchangeError::InvalidUnits`] if the string is malformed, has
/// more fractional digits than `decimals`, or exceeds `u128`.
///
/// # Examples
///
/// ```
/// use token_exchange::domain::{Amount, Decimals};
/// use token_exchange::math::units::parse_units;
///
/// let d = Decimals::new(6).expect("valid");
/// assert_eq!(parse_units("1.5", d), Ok(Amount::new(1_500_000)));
/// assert!(parse_units("1.0000001", d).is_err());
/// ```
pub fn parse_units(value: &str, decimals: Decimals) -> Result<Amount, ExchangeError> {
    let (whole, fraction) = match value.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (value, None),
    };

    if whole.is_empty() {
        return Err(ExchangeError::InvalidUnits("missing integer part"));
    }
    let whole = parse_digits(whole)?;

    let places = u32::from(decimals.get());
    let fraction = match fraction {
        None => 0,
        Some("") => return Err(ExchangeError::InvalidUnits("missing fractional part")),
        Some(f) => {
            let len = u32::try_from(f.len())
                .map_err(|_| ExchangeError::InvalidUnits("too many decimal places"))?;
            if len > places {
                return Err(ExchangeError::InvalidUnits("too many decimal places"));
            }
            parse_digits(f)? * 10u128.pow(places - len)
        }
    };

    whole
        .checked_mul(decimals.factor())
        .and_then(|scaled| scaled.checked_add(fraction))
        .map(Amount::new)
        .ok_or(ExchangeError::InvalidUnits("value exceeds u128"))
}

fn parse_digits(digits: &str) -> Result<u128, ExchangeError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExchangeError::InvalidUnits("unexpected character"));
    }
    digits
        .parse::<u128>()
        .map_err(|_| ExchangeError::InvalidUnits("value exceeds u128"))
}

/// Renders raw units as a decimal string.
///
/// # Examples
///
/// ```
/// use token_exchange::domain::{Amount, Decimals};
/// use token_exchange::math::units::format_units;
///
/// let d = Decimals::new(6).expect("valid");
/// assert_eq!(format_units(Amount::new(1_500_000), d), "1.5");
/// assert_eq!(format_units(Amount::new(2_000_000), d), "2.0");
/// ```
#[must_use]
pub fn format_units(amount: Amount, decimals: Decimals) -> String {
    let factor = decimals.factor();
    let whole = amount.get() / factor;
    let fraction = amount.get() % factor;

    let width = usize::from(decimals.get());
    let padded = format!("{fraction:0width$}");
    let trimmed = padded.trim_end_matches('0');
    if trimmed.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{trimmed}")
    }
}

/// Parses an 18-decimal base-asset string.
///
/// # Errors
///
/// See [`parse_units`].
pub fn parse_ether(value: &str) -> Result<Amount, ExchangeError> {
    parse_units(value, Decimals::ETHER)
}

/// Formats raw units with 18 decimals.
#[must_use]
pub fn format_ether(amount: Amount) -> String {
    format_units(amount, Decimals::ETHER)
}
