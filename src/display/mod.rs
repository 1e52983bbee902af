//! Display formatting for terminal output

pub mod balance;

pub use balance::{format_balance, format_outcome, Action};
