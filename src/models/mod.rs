//! Core data models for the account ledger
//!
//! The ledger tracks a single balance, so the only domain type is the money
//! amount it is expressed in.

pub mod money;

pub use money::{Money, MoneyParseError};
