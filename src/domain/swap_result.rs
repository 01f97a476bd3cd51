//! Swap direction and outcome.

use core::fmt;

use super::Amount;

/// Which asset a swap sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell the base asset, receive tokens.
    BaseToToken,
    /// Sell tokens, receive the base asset.
    TokenToBase,
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseToToken => write!(f, "base->token"),
            Self::TokenToBase => write!(f, "token->base"),
        }
    }
}

/// A committed swap.
///
/// Both amounts are strictly positive; the pool rejects swaps whose output
/// truncates to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
        }
    }

    /// Returns the direction of the swap.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the amount of the input asset the pool received.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount of the output asset the pool paid.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome({}, in={}, out={})",
            self.direction, self.amount_in, self.amount_out
        )
    }
}

/// Assets returned by burning liquidity shares.
///
/// `token_out` has already been transferred through the token ledger;
/// `base_out` is the base-asset value owed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    /// Token units paid out.
    pub token_out: Amount,
    /// Base-asset units paid out.
    pub base_out: Amount,
}
