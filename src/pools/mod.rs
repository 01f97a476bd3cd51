//! Exchange implementations.
//!
//! [`Exchange`] is the single-writer constant-product pool; wrap it in
//! [`SharedExchange`] to operate one pool from several threads.

mod exchange;
#[cfg(test)]
mod proptest_properties;
mod shared;

pub use exchange::Exchange;
pub use shared::SharedExchange;
