//! Path management for the account ledger
//!
//! ## Path Resolution Order
//!
//! 1. An explicit file passed on the command line (`--file`)
//! 2. `LEDGER_DATA_DIR` environment variable: `$LEDGER_DATA_DIR/balance.json`
//! 3. `balance.json` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Environment variable overriding the directory that holds the balance file
pub const DATA_DIR_ENV: &str = "LEDGER_DATA_DIR";

/// File name of the balance file inside the data directory
pub const BALANCE_FILE_NAME: &str = "balance.json";

/// Manages the paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    balance_file: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// Uses `LEDGER_DATA_DIR` if set, otherwise the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                LedgerError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create LedgerPaths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            balance_file: base_dir.join(BALANCE_FILE_NAME),
        }
    }

    /// Create LedgerPaths pointing at an explicit balance file
    pub fn with_balance_file(balance_file: PathBuf) -> Self {
        Self { balance_file }
    }

    /// Resolve paths from an optional command-line override
    pub fn resolve(file: Option<PathBuf>) -> Result<Self, LedgerError> {
        match file {
            Some(file) => Ok(Self::with_balance_file(file)),
            None => Self::new(),
        }
    }

    /// Get the path to the balance file
    pub fn balance_file(&self) -> &Path {
        &self.balance_file
    }
}
