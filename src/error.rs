//! Unified error types for the exchange.
//!
//! All fallible operations across the crate return [`ExchangeError`],
//! ensuring a consistent error handling experience for consumers.  Any
//! error aborts the enclosing operation without mutating pool state.

use crate::domain::{Amount, Shares};

/// Failure reported by a [`TokenLedger`](crate::traits::TokenLedger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The debited account holds fewer units than requested.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Units the transfer tried to move.
        requested: Amount,
        /// Units held by the debited account.
        available: Amount,
    },

    /// The spender has not been approved for enough units.
    #[error("insufficient allowance: requested {requested}, approved {approved}")]
    InsufficientAllowance {
        /// Units the transfer tried to move.
        requested: Amount,
        /// Units the owner approved for the spender.
        approved: Amount,
    },

    /// The ledger refused the transfer for another reason.
    #[error("transfer rejected: {0}")]
    Rejected(&'static str),
}

/// Errors produced by exchange operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// An amount that must be strictly positive was zero, or an operation
    /// would move zero units.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The pool holds no reserves for the requested quote or swap.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A non-initial deposit supplied fewer tokens than the reserve ratio requires.
    #[error("ratio mismatch: supplied {supplied} token units, required {required}")]
    RatioMismatch {
        /// Token units offered by the caller.
        supplied: Amount,
        /// Token units the current reserve ratio demands.
        required: Amount,
    },

    /// The caller tried to burn or move more shares than it holds.
    #[error("insufficient shares: requested {requested}, held {held}")]
    InsufficientShares {
        /// Shares requested.
        requested: Shares,
        /// Shares held by the caller.
        held: Shares,
    },

    /// A swap's output fell below the caller's minimum.
    #[error("slippage exceeded: output {output} below minimum {min_output}")]
    SlippageExceeded {
        /// Output the pool would pay.
        output: Amount,
        /// Minimum output accepted by the caller.
        min_output: Amount,
    },

    /// The token collaborator reported a failure; the operation was rolled back.
    #[error("token transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid exchange configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Decimal places outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A decimal string could not be converted to raw units.
    #[error("invalid units: {0}")]
    InvalidUnits(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ExchangeError>;
