//! Arithmetic utilities for exchange calculations.
//!
//! - [`quote_output`]: the constant-product pricing formula.
//! - [`mul_div`]: `a × b / d` with a 256-bit intermediate.
//! - [`CheckedArithmetic`]: overflow-safe reserve and share updates.
//! - [`units`]: decimal string conversion.

mod checked;
mod constant_product;
pub mod units;
mod wide;

pub use checked::CheckedArithmetic;
pub use constant_product::quote_output;
pub use wide::{mul_div, mul_div_wide, narrow, product, widen, U256};
