//! Token ledger implementations.
//!
//! [`BalanceLedger`] is an in-memory [`TokenLedger`](crate::traits::TokenLedger)
//! for simulations and tests.  Production integrations implement the trait
//! over their own balance store.

mod balance_ledger;

pub use balance_ledger::BalanceLedger;
