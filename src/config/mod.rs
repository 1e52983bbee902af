//! Configuration module for the account ledger
//!
//! Resolves where the balance file lives.

pub mod paths;

pub use paths::LedgerPaths;
