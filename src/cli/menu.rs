//! Interactive menu
//!
//! A synchronous read-evaluate-print loop over any line reader and writer.
//! Rejections and storage failures end the current action only; the menu is
//! shown again until the user exits or input runs out.

use std::io::{BufRead, Write};

use crate::display::{format_balance, format_outcome, Action};
use crate::error::LedgerResult;
use crate::services::AccountService;
use crate::storage::BalanceStore;

const SEPARATOR: &str = "--------------------------------";

/// A selection from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewBalance,
    Credit,
    Debit,
    Exit,
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::ViewBalance),
            "2" => Some(Self::Credit),
            "3" => Some(Self::Debit),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or `input` is exhausted
pub fn run_menu<S, R, W>(
    service: &AccountService<'_, S>,
    input: &mut R,
    output: &mut W,
) -> LedgerResult<()>
where
    S: BalanceStore + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        print_menu(output)?;

        let Some(choice) = prompt(input, output, "Enter your choice (1-4): ")? else {
            break;
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::ViewBalance) => {
                report(output, service.show_total().map(format_balance))?;
            }
            Some(MenuChoice::Credit) => {
                let Some(amount) = prompt(input, output, "Enter credit amount: ")? else {
                    break;
                };
                let result = service
                    .credit(&amount)
                    .map(|outcome| format_outcome(Action::Credit, &outcome));
                report(output, result)?;
            }
            Some(MenuChoice::Debit) => {
                let Some(amount) = prompt(input, output, "Enter debit amount: ")? else {
                    break;
                };
                let result = service
                    .debit(&amount)
                    .map(|outcome| format_outcome(Action::Debit, &outcome));
                report(output, result)?;
            }
            Some(MenuChoice::Exit) => break,
            None => writeln!(output, "Invalid choice, please select 1-4.")?,
        }
    }

    writeln!(output, "Exiting the program. Goodbye!")?;
    output.flush()?;
    Ok(())
}

fn print_menu<W: Write>(output: &mut W) -> LedgerResult<()> {
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output, "Account Management System")?;
    writeln!(output, "1. View Balance")?;
    writeln!(output, "2. Credit Account")?;
    writeln!(output, "3. Debit Account")?;
    writeln!(output, "4. Exit")?;
    writeln!(output, "{}", SEPARATOR)?;
    Ok(())
}

/// Show `text` and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> LedgerResult<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report<W: Write>(output: &mut W, result: LedgerResult<String>) -> LedgerResult<()> {
    match result {
        Ok(message) => writeln!(output, "{}", message)?,
        Err(e) => {
            tracing::error!(error = %e, "account action failed");
            writeln!(output, "Error: {}", e)?;
        }
    }
    Ok(())
}
