//! Account service
//!
//! Implements the three account actions (show total, credit, debit) on top of
//! an injected [`BalanceStore`], enforcing that amounts are positive and the
//! balance never goes negative.

use thiserror::Error;

use crate::error::LedgerResult;
use crate::models::Money;
use crate::storage::{BalanceStore, MAX_BALANCE};

/// Why an operation was refused
///
/// A rejection leaves the balance untouched. The display strings are the
/// messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The amount was not a number, or was zero or negative
    #[error("Invalid amount.")]
    InvalidAmount,

    /// A debit asked for more than the current balance
    #[error("Insufficient funds for this debit.")]
    InsufficientFunds,

    /// A credit would push the balance past what the store can hold
    #[error("Amount would exceed the maximum balance.")]
    BalanceLimit,
}

/// Result of a credit or debit that did not fail at the storage level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The balance was updated and persisted
    Applied { previous: Money, balance: Money },
    /// The operation was refused; nothing was written
    Rejected(Rejection),
}

impl OperationOutcome {
    /// The new balance, if the operation was applied
    pub fn balance(&self) -> Option<Money> {
        match self {
            Self::Applied { balance, .. } => Some(*balance),
            Self::Rejected(_) => None,
        }
    }

    /// Convert into a plain result carrying the new balance
    pub fn into_result(self) -> Result<Money, Rejection> {
        match self {
            Self::Applied { balance, .. } => Ok(balance),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Service for the single account
pub struct AccountService<'a, S: BalanceStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: BalanceStore + ?Sized> AccountService<'a, S> {
    /// Create a new account service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Get the current balance
    pub fn show_total(&self) -> LedgerResult<Money> {
        self.store.read_balance()
    }

    /// Credit the account with an amount typed by the user
    pub fn credit(&self, input: &str) -> LedgerResult<OperationOutcome> {
        match parse_amount(input) {
            Ok(amount) => self.credit_amount(amount),
            Err(rejection) => Ok(reject(rejection)),
        }
    }

    /// Credit the account with an already-parsed amount
    pub fn credit_amount(&self, amount: Money) -> LedgerResult<OperationOutcome> {
        if !amount.is_positive() {
            return Ok(reject(Rejection::InvalidAmount));
        }

        let previous = self.store.read_balance()?;
        let balance = match previous.checked_add(amount) {
            Some(balance) if balance <= MAX_BALANCE => balance,
            _ => return Ok(reject(Rejection::BalanceLimit)),
        };

        self.store.write_balance(balance)?;
        tracing::info!(%amount, %previous, %balance, "credited account");

        Ok(OperationOutcome::Applied { previous, balance })
    }

    /// Debit the account by an amount typed by the user
    pub fn debit(&self, input: &str) -> LedgerResult<OperationOutcome> {
        match parse_amount(input) {
            Ok(amount) => self.debit_amount(amount),
            Err(rejection) => Ok(reject(rejection)),
        }
    }

    /// Debit the account by an already-parsed amount
    ///
    /// Debiting exactly the current balance is allowed and leaves zero.
    pub fn debit_amount(&self, amount: Money) -> LedgerResult<OperationOutcome> {
        if !amount.is_positive() {
            return Ok(reject(Rejection::InvalidAmount));
        }

        let previous = self.store.read_balance()?;
        if amount > previous {
            return Ok(reject(Rejection::InsufficientFunds));
        }

        let balance = previous - amount;
        self.store.write_balance(balance)?;
        tracing::info!(%amount, %previous, %balance, "debited account");

        Ok(OperationOutcome::Applied { previous, balance })
    }
}

fn parse_amount(input: &str) -> Result<Money, Rejection> {
    Money::parse(input).map_err(|e| {
        tracing::debug!(input, error = %e, "could not parse amount");
        Rejection::InvalidAmount
    })
}

fn reject(rejection: Rejection) -> OperationOutcome {
    tracing::debug!(%rejection, "operation rejected");
    OperationOutcome::Rejected(rejection)
}
