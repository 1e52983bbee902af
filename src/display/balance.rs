//! Balance display formatting
//!
//! Formats balances and operation outcomes for terminal output.

use crate::models::Money;
use crate::services::OperationOutcome;

/// Which action produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Credit,
    Debit,
}

impl Action {
    fn past_tense(self) -> &'static str {
        match self {
            Action::Credit => "credited",
            Action::Debit => "debited",
        }
    }
}

/// Format the current balance line
pub fn format_balance(balance: Money) -> String {
    format!("Current balance: {}", balance)
}

/// Format the result of a credit or debit
///
/// Rejections render as their user-facing message.
pub fn format_outcome(action: Action, outcome: &OperationOutcome) -> String {
    match outcome {
        OperationOutcome::Applied { balance, .. } => {
            format!("Amount {}. New balance: {}", action.past_tense(), balance)
        }
        OperationOutcome::Rejected(rejection) => rejection.to_string(),
    }
}
