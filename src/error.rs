//! Custom error types for the account ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

use crate::services::account::Rejection;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The balance file could not be written or read
    #[error("Storage error: {0}")]
    Storage(String),

    /// The balance file exists but does not hold a valid balance
    #[error("Corrupt balance file {path}: {reason}")]
    Corrupt { path: String, reason: String },

    /// An operation was refused by the account rules
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl LedgerError {
    /// Create a corruption error for the given file
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a corruption error
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
