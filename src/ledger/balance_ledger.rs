//! In-memory token ledger with balances and allowances.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::TransferError;
use crate::traits::TokenLedger;

/// A fungible-token balance sheet with owner-granted allowances.
///
/// Every transfer validates balance and allowance before mutating
/// anything, so a failed call leaves the ledger untouched.
///
/// # Examples
///
/// ```
/// use token_exchange::domain::{Address, Amount};
/// use token_exchange::ledger::BalanceLedger;
/// use token_exchange::traits::TokenLedger;
///
/// let alice = Address::from_bytes([1u8; 20]);
/// let pool = Address::from_bytes([2u8; 20]);
///
/// let mut ledger = BalanceLedger::new();
/// ledger.mint(alice, Amount::new(100));
/// ledger.approve(alice, pool, Amount::new(60));
///
/// assert!(ledger.transfer_from(pool, alice, pool, Amount::new(60)).is_ok());
/// assert_eq!(ledger.balance_of(&pool), Amount::new(60));
/// assert!(ledger.transfer_from(pool, alice, pool, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceLedger {
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
}

impl BalanceLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `account` out of thin air, saturating at
    /// `u128::MAX`.
    pub fn mint(&mut self, account: Address, amount: Amount) {
        let balance = self.balances.entry(account).or_default();
        *balance = Amount::new(balance.get().saturating_add(amount.get()));
    }

    /// Sets the allowance `owner` grants to `spender`, replacing any
    /// previous value.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Returns the balance of `account`.
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Returns the allowance `owner` granted to `spender`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn checked_move(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(Amount, Amount), TransferError> {
        let available = self.balance_of(&sender);
        let debited = available
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                requested: amount,
                available,
            })?;
        let credited = if sender == recipient {
            available
        } else {
            self.balance_of(&recipient)
                .checked_add(&amount)
                .ok_or(TransferError::Rejected("recipient balance overflow"))?
        };
        Ok((debited, credited))
    }

    fn apply_move(
        &mut self,
        sender: Address,
        recipient: Address,
        debited: Amount,
        credited: Amount,
    ) {
        if sender == recipient {
            return;
        }
        self.balances.insert(sender, debited);
        self.balances.insert(recipient, credited);
    }
}

impl TokenLedger for BalanceLedger {
    fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let approved = self.allowance(&owner, &spender);
        let remaining = approved
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientAllowance {
                requested: amount,
                approved,
            })?;
        let (debited, credited) = self.checked_move(owner, recipient, amount)?;

        self.approve(owner, spender, remaining);
        self.apply_move(owner, recipient, debited, credited);
        Ok(())
    }

    fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let (debited, credited) = self.checked_move(sender, recipient, amount)?;
        self.apply_move(sender, recipient, debited, credited);
        Ok(())
    }
}
