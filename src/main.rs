use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use account_ledger::cli::{handle_account_command, run_menu, AccountCommands};
use account_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths};
use account_ledger::logging;
use account_ledger::services::AccountService;
use account_ledger::storage::FileBalanceStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Single-account command-line ledger",
    long_about = "Keeps one balance in a JSON file and lets you view, credit or \
                  debit it. Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Balance file to use (default: $LEDGER_DATA_DIR/balance.json, then ./balance.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    #[command(flatten)]
    Account(AccountCommands),

    /// Show where the balance is stored
    Config,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let paths = LedgerPaths::resolve(cli.file)?;
    let store = FileBalanceStore::new(paths.balance_file());
    let service = AccountService::new(&store);

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            run_menu(&service, &mut input, &mut output)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&service, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Account Ledger Configuration");
            println!("============================");
            println!("Balance file: {}", store.path().display());
            println!(
                "Initialized:  {}",
                if store.exists() { "Yes" } else { "No" }
            );
            println!();
            println!("Override with --file or {}.", DATA_DIR_ENV);
        }
    }

    Ok(())
}
