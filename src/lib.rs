//! account-ledger - a single-account command-line ledger
//!
//! The ledger keeps one non-negative balance in a JSON file and lets the user
//! view it, credit it or debit it, either through an interactive menu or
//! through one-shot subcommands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Balance file location
//! - `error`: Custom error types
//! - `models`: The money type balances are expressed in
//! - `storage`: The balance store (JSON file or in memory)
//! - `services`: Account rules (credit, debit, show total)
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and subcommand handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use account_ledger::services::AccountService;
//! use account_ledger::storage::MemoryBalanceStore;
//!
//! let store = MemoryBalanceStore::new();
//! let service = AccountService::new(&store);
//!
//! let outcome = service.credit("250.50")?;
//! assert_eq!(outcome.balance().unwrap().to_string(), "1250.50");
//! # Ok::<(), account_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
