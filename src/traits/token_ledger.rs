//! Token-transfer collaborator.
//!
//! The exchange never stores token balances of its own accounts; it asks a
//! [`TokenLedger`] to move them.  A ledger call either moves the full
//! amount or returns an error and moves nothing.  Any error aborts the
//! enclosing pool operation and rolls back its reserve changes.

use crate::domain::{Address, Amount};
use crate::error::TransferError;

/// Balance ledger of the traded token.
///
/// The exchange issues at most one call per operation, after it has
/// applied its own state changes.
pub trait TokenLedger {
    /// Moves `amount` from `owner` to `recipient` on behalf of `spender`.
    ///
    /// Used to pull tokens from liquidity providers and swappers; the
    /// exchange passes its own address as both `spender` and `recipient`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if `owner` lacks the balance or has not
    /// approved `spender` for `amount`.
    fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` from `sender` to `recipient`.
    ///
    /// Used to pay tokens out of the exchange's own balance.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if `sender` lacks the balance.
    fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
