//! Storage layer for the account ledger
//!
//! Provides JSON file storage with atomic writes and an in-memory
//! counterpart behind the [`BalanceStore`] trait.

pub mod balance;
pub mod file_io;

pub use balance::{
    BalanceStore, FileBalanceStore, MemoryBalanceStore, DEFAULT_BALANCE, MAX_BALANCE,
};
pub use file_io::{read_json, write_json_atomic};
