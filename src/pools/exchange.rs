//! Constant-product exchange between one token and the base asset.
//!
//! Swaps price along `x × y = k` with no fee:
//!
//! ```text
//! output = input × output_reserve / (input_reserve + input)
//! ```
//!
//! # Deposits
//!
//! 1. Empty pool: reserves are set to the deposit and `base_amount`
//!    shares are minted.  The first provider sets the price.
//! 2. Funded pool: `required = base_amount × reserve_token / reserve_base`
//!    tokens are consumed (under-supply is rejected, any excess stays with
//!    the caller) and `total_shares × base_amount / reserve_base` shares
//!    are minted.
//!
//! # Atomicity
//!
//! Every operation validates, applies its effects to pool state, and then
//! makes at most one [`TokenLedger`] call.  If that call fails the state
//! is restored from a checkpoint, so a failed operation is never
//! observable.  The base asset never passes through the ledger: it is
//! attached to deposits and sells as value, and returned to the caller
//! in [`Withdrawal`] and [`SwapOutcome`].

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::ExchangeConfig;
use crate::domain::{
    Address, Amount, Shares, SwapDirection, SwapOutcome, Token, Withdrawal,
};
use crate::error::{ExchangeError, TransferError};
use crate::math::{mul_div, product, quote_output, CheckedArithmetic};
use crate::traits::{FromConfig, LiquidityPool, SwapPool, TokenLedger};

/// A single-pair constant-product exchange.
///
/// # State
///
/// - `reserve_token` / `reserve_base`: assets held by the pool (raw units)
/// - `total_shares`: outstanding liquidity shares
/// - `shares_of`: per-provider share balances, zero balances pruned
///
/// # Example
///
/// ```rust
/// use token_exchange::config::ExchangeConfig;
/// use token_exchange::domain::{Address, Amount, Decimals, Token};
/// use token_exchange::ledger::BalanceLedger;
/// use token_exchange::math::units::{format_ether, parse_ether};
/// use token_exchange::pools::Exchange;
/// use token_exchange::traits::LiquidityPool;
///
/// let token = Token::new(Address::from_bytes([1u8; 20]), Decimals::ETHER);
/// let pool_addr = Address::from_bytes([2u8; 20]);
/// let alice = Address::from_bytes([3u8; 20]);
///
/// let mut ledger = BalanceLedger::new();
/// ledger.mint(alice, parse_ether("2000").expect("units"));
/// ledger.approve(alice, pool_addr, parse_ether("2000").expect("units"));
///
/// let cfg = ExchangeConfig::new(token, pool_addr).expect("valid");
/// let mut pool = Exchange::new(&cfg, ledger).expect("pool");
/// let tokens = parse_ether("2000").expect("units");
/// let base = parse_ether("1000").expect("units");
/// pool.add_liquidity(alice, tokens, base).expect("seeded");
///
/// let out = pool.get_token_amount(parse_ether("1").expect("units")).expect("quote");
/// assert_eq!(format_ether(out), "1.998001998001998001");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange<L> {
    config: ExchangeConfig,
    ledger: L,
    reserve_token: Amount,
    reserve_base: Amount,
    total_shares: Shares,
    shares_of: HashMap<Address, Shares>,
}

/// Pool state captured before an operation's effects are applied.
struct Checkpoint {
    reserve_token: Amount,
    reserve_base: Amount,
    total_shares: Shares,
    provider: Option<(Address, Shares)>,
}

impl<L: TokenLedger> Exchange<L> {
    /// Creates an empty exchange backed by `ledger`.
    ///
    /// # Errors
    ///
    /// Propagates [`ExchangeConfig::validate`] failures.
    pub fn new(config: &ExchangeConfig, ledger: L) -> Result<Self, ExchangeError> {
        config.validate()?;
        debug!(config = %config, "exchange created");
        Ok(Self {
            config: *config,
            ledger,
            reserve_token: Amount::ZERO,
            reserve_base: Amount::ZERO,
            total_shares: Shares::ZERO,
            shares_of: HashMap::new(),
        })
    }

    /// Returns the exchange's configuration.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the exchange's own account address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.config.exchange()
    }

    /// Returns the traded token.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.config.token()
    }

    /// Returns the traded token's address.
    #[must_use]
    pub const fn token_address(&self) -> Address {
        self.config.token().address()
    }

    /// Returns the token reserve.
    #[must_use]
    pub const fn reserve(&self) -> Amount {
        self.reserve_token
    }

    /// Returns the base-asset balance held by the pool.
    #[must_use]
    pub const fn base_balance(&self) -> Amount {
        self.reserve_base
    }

    /// Returns `true` if the pool holds no reserves and no shares exist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Iterates over providers with a non-zero share balance.
    pub fn providers(&self) -> impl Iterator<Item = (&Address, &Shares)> {
        self.shares_of.iter()
    }

    /// Returns the token ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the token ledger mutably, e.g. to fund or approve accounts.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Quotes the tokens received for selling `base_in`.
    ///
    /// # Errors
    ///
    /// See [`quote_output`].
    pub fn get_token_amount(&self, base_in: Amount) -> Result<Amount, ExchangeError> {
        self.quote(SwapDirection::BaseToToken, base_in)
    }

    /// Quotes the base asset received for selling `token_in`.
    ///
    /// # Errors
    ///
    /// See [`quote_output`].
    pub fn get_eth_amount(&self, token_in: Amount) -> Result<Amount, ExchangeError> {
        self.quote(SwapDirection::TokenToBase, token_in)
    }

    /// Sells attached base-asset value for at least `min_token_out` tokens.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_base_for_token(
        &mut self,
        caller: Address,
        base_in: Amount,
        min_token_out: Amount,
    ) -> Result<SwapOutcome, ExchangeError> {
        self.swap(caller, SwapDirection::BaseToToken, base_in, min_token_out)
    }

    /// Sells `token_in` tokens for at least `min_base_out` of the base asset.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_token_for_base(
        &mut self,
        caller: Address,
        token_in: Amount,
        min_base_out: Amount,
    ) -> Result<SwapOutcome, ExchangeError> {
        self.swap(caller, SwapDirection::TokenToBase, token_in, min_base_out)
    }

    fn checkpoint(&self, provider: Option<Address>) -> Checkpoint {
        Checkpoint {
            reserve_token: self.reserve_token,
            reserve_base: self.reserve_base,
            total_shares: self.total_shares,
            provider: provider.map(|p| (p, self.shares_of(&p))),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.reserve_token = checkpoint.reserve_token;
        self.reserve_base = checkpoint.reserve_base;
        self.total_shares = checkpoint.total_shares;
        if let Some((provider, shares)) = checkpoint.provider {
            self.set_shares(provider, shares);
        }
    }

    fn set_shares(&mut self, provider: Address, shares: Shares) {
        if shares.is_zero() {
            self.shares_of.remove(&provider);
        } else {
            self.shares_of.insert(provider, shares);
        }
    }

    /// Runs the single ledger interaction of an operation, rolling the pool
    /// back to `checkpoint` if it fails.
    fn settle<F>(
        &mut self,
        checkpoint: Checkpoint,
        operation: &'static str,
        interaction: F,
    ) -> Result<(), ExchangeError>
    where
        F: FnOnce(&mut L, Address) -> Result<(), TransferError>,
    {
        let exchange = self.address();
        if let Err(err) = interaction(&mut self.ledger, exchange) {
            self.restore(checkpoint);
            warn!(operation, error = %err, "token transfer failed, operation rolled back");
            return Err(err.into());
        }
        Ok(())
    }
}

impl<L: TokenLedger + Default> FromConfig<ExchangeConfig> for Exchange<L> {
    /// Creates an empty exchange over a default ledger.
    ///
    /// # Errors
    ///
    /// Propagates [`ExchangeConfig::validate`] failures.
    fn from_config(config: &ExchangeConfig) -> Result<Self, ExchangeError> {
        Self::new(config, L::default())
    }
}

impl<L: TokenLedger> SwapPool for Exchange<L> {
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, ExchangeError> {
        let (input_reserve, output_reserve) = match direction {
            SwapDirection::BaseToToken => (self.reserve_base, self.reserve_token),
            SwapDirection::TokenToBase => (self.reserve_token, self.reserve_base),
        };
        let output = quote_output(input_reserve, output_reserve, amount_in)?;
        debug!(%direction, %amount_in, %output, "quoted");
        Ok(output)
    }

    /// Executes a swap along the constant-product curve.
    ///
    /// # Panics
    ///
    /// Panics if the reserve product decreases, which truncating division
    /// makes impossible.
    fn swap(
        &mut self,
        caller: Address,
        direction: SwapDirection,
        amount_in: Amount,
        min_output: Amount,
    ) -> Result<SwapOutcome, ExchangeError> {
        let output = self.quote(direction, amount_in)?;
        if output < min_output {
            return Err(ExchangeError::SlippageExceeded { output, min_output });
        }
        if output.is_zero() {
            return Err(ExchangeError::InvalidAmount("swap output truncates to zero"));
        }

        let (reserve_token, reserve_base) = match direction {
            SwapDirection::BaseToToken => (
                self.reserve_token.safe_sub(&output, "reserve_token after swap")?,
                self.reserve_base.safe_add(&amount_in, "reserve_base after swap")?,
            ),
            SwapDirection::TokenToBase => (
                self.reserve_token.safe_add(&amount_in, "reserve_token after swap")?,
                self.reserve_base.safe_sub(&output, "reserve_base after swap")?,
            ),
        };

        let k_before = product(self.reserve_token, self.reserve_base);
        let k_after = product(reserve_token, reserve_base);
        assert!(
            k_after >= k_before,
            "constant product decreased: {k_before} -> {k_after}"
        );

        let checkpoint = self.checkpoint(None);
        self.reserve_token = reserve_token;
        self.reserve_base = reserve_base;

        self.settle(checkpoint, "swap", |ledger, exchange| match direction {
            SwapDirection::BaseToToken => ledger.transfer(exchange, caller, output),
            SwapDirection::TokenToBase => {
                ledger.transfer_from(exchange, caller, exchange, amount_in)
            }
        })?;

        info!(
            trader = %caller,
            %direction,
            %amount_in,
            amount_out = %output,
            reserve_token = %self.reserve_token,
            reserve_base = %self.reserve_base,
            "swap executed"
        );
        Ok(SwapOutcome::new(direction, amount_in, output))
    }

    fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_token, self.reserve_base)
    }
}

impl<L: TokenLedger> LiquidityPool for Exchange<L> {
    fn add_liquidity(
        &mut self,
        caller: Address,
        token_amount: Amount,
        base_amount: Amount,
    ) -> Result<Shares, ExchangeError> {
        if token_amount.is_zero() {
            return Err(ExchangeError::InvalidAmount("token amount must be positive"));
        }
        if base_amount.is_zero() {
            return Err(ExchangeError::InvalidAmount("base amount must be positive"));
        }

        let seeding = self.is_empty();
        let (token_in, minted) = if seeding {
            (token_amount, Shares::new(base_amount.get()))
        } else {
            let required = mul_div(base_amount, self.reserve_token, self.reserve_base)?;
            if token_amount < required {
                return Err(ExchangeError::RatioMismatch {
                    supplied: token_amount,
                    required,
                });
            }
            let minted = mul_div(
                Amount::new(self.total_shares.get()),
                base_amount,
                self.reserve_base,
            )?;
            if minted.is_zero() {
                return Err(ExchangeError::InvalidAmount(
                    "deposit too small to mint shares",
                ));
            }
            (required, Shares::new(minted.get()))
        };

        let reserve_token = self.reserve_token.safe_add(&token_in, "reserve_token on deposit")?;
        let reserve_base = self.reserve_base.safe_add(&base_amount, "reserve_base on deposit")?;
        let total_shares = self.total_shares.safe_add(&minted, "total_shares on deposit")?;
        let provider_shares = self
            .shares_of(&caller)
            .safe_add(&minted, "provider shares on deposit")?;

        let checkpoint = self.checkpoint(Some(caller));
        self.reserve_token = reserve_token;
        self.reserve_base = reserve_base;
        self.total_shares = total_shares;
        self.set_shares(caller, provider_shares);

        if !token_in.is_zero() {
            self.settle(checkpoint, "add_liquidity", |ledger, exchange| {
                ledger.transfer_from(exchange, caller, exchange, token_in)
            })?;
        }

        info!(
            provider = %caller,
            seeding,
            %token_in,
            base_in = %base_amount,
            %minted,
            total_shares = %self.total_shares,
            "liquidity added"
        );
        Ok(minted)
    }

    fn remove_liquidity(
        &mut self,
        caller: Address,
        shares: Shares,
    ) -> Result<Withdrawal, ExchangeError> {
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount("shares must be positive"));
        }
        let held = self.shares_of(&caller);
        if shares > held {
            return Err(ExchangeError::InsufficientShares {
                requested: shares,
                held,
            });
        }

        let burned = Amount::new(shares.get());
        let total = Amount::new(self.total_shares.get());
        let token_out = mul_div(self.reserve_token, burned, total)?;
        let base_out = mul_div(self.reserve_base, burned, total)?;

        let reserve_token = self.reserve_token.safe_sub(&token_out, "reserve_token on withdrawal")?;
        let reserve_base = self.reserve_base.safe_sub(&base_out, "reserve_base on withdrawal")?;
        let total_shares = self.total_shares.safe_sub(&shares, "total_shares on withdrawal")?;
        let provider_shares = held.safe_sub(&shares, "provider shares on withdrawal")?;

        let checkpoint = self.checkpoint(Some(caller));
        self.reserve_token = reserve_token;
        self.reserve_base = reserve_base;
        self.total_shares = total_shares;
        self.set_shares(caller, provider_shares);

        if !token_out.is_zero() {
            self.settle(checkpoint, "remove_liquidity", |ledger, exchange| {
                ledger.transfer(exchange, caller, token_out)
            })?;
        }

        info!(
            provider = %caller,
            burned = %shares,
            %token_out,
            %base_out,
            total_shares = %self.total_shares,
            "liquidity removed"
        );
        Ok(Withdrawal {
            token_out,
            base_out,
        })
    }

    fn transfer_shares(
        &mut self,
        from: Address,
        to: Address,
        shares: Shares,
    ) -> Result<(), ExchangeError> {
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount("shares must be positive"));
        }
        let held = self.shares_of(&from);
        if shares > held {
            return Err(ExchangeError::InsufficientShares {
                requested: shares,
                held,
            });
        }
        if from == to {
            return Ok(());
        }

        let from_after = held.safe_sub(&shares, "sender shares")?;
        let to_after = self.shares_of(&to).safe_add(&shares, "recipient shares")?;
        self.set_shares(from, from_after);
        self.set_shares(to, to_after);

        debug!(%from, %to, %shares, "shares transferred");
        Ok(())
    }

    fn total_shares(&self) -> Shares {
        self.total_shares
    }

    fn shares_of(&self, provider: &Address) -> Shares {
        self.shares_of.get(provider).copied().unwrap_or_default()
    }
}
