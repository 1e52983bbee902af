//! Service layer for the account ledger
//!
//! The service layer provides the account rules on top of the storage layer.

pub mod account;

pub use account::{AccountService, OperationOutcome, Rejection};
