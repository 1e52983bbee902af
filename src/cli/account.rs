//! Account CLI commands
//!
//! One-shot versions of the menu actions.

use clap::Subcommand;

use crate::display::{format_balance, format_outcome, Action};
use crate::error::{LedgerError, LedgerResult};
use crate::services::{AccountService, OperationOutcome};
use crate::storage::BalanceStore;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Show the current balance
    #[command(alias = "total")]
    Balance,
    /// Credit the account
    Credit {
        /// Amount to add (e.g., "250.50" or "250")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Debit the account
    Debit {
        /// Amount to take out (e.g., "250.50" or "250")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle an account command
///
/// A rejected credit or debit is returned as [`LedgerError::Rejected`] so the
/// process exits with a failure status.
pub fn handle_account_command<S>(
    service: &AccountService<'_, S>,
    cmd: AccountCommands,
) -> LedgerResult<()>
where
    S: BalanceStore + ?Sized,
{
    match cmd {
        AccountCommands::Balance => {
            let balance = service.show_total()?;
            println!("{}", format_balance(balance));
        }
        AccountCommands::Credit { amount } => {
            let outcome = service.credit(&amount)?;
            print_outcome(Action::Credit, outcome)?;
        }
        AccountCommands::Debit { amount } => {
            let outcome = service.debit(&amount)?;
            print_outcome(Action::Debit, outcome)?;
        }
    }

    Ok(())
}

fn print_outcome(action: Action, outcome: OperationOutcome) -> LedgerResult<()> {
    outcome.into_result().map_err(LedgerError::Rejected)?;
    println!("{}", format_outcome(action, &outcome));
    Ok(())
}
