//! Exchange configuration.
//!
//! [`ExchangeConfig`] names the traded token and the exchange's own
//! account, and is validated before any pool is built from it.

mod exchange;

pub use exchange::ExchangeConfig;
