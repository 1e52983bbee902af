//! Balance storage
//!
//! The whole persisted state of the ledger is one number. [`BalanceStore`] is
//! the seam the account service talks to; [`FileBalanceStore`] keeps the value
//! in a JSON file and [`MemoryBalanceStore`] keeps it in process.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Balance a fresh ledger starts with
pub const DEFAULT_BALANCE: Money = Money::from_dollars_cents(1000, 0);

/// Largest balance the store accepts
///
/// The file holds the balance as a double; below this bound every cent value
/// survives the conversion unchanged.
pub const MAX_BALANCE: Money = Money::from_cents(1_000_000_000_000_000);

/// Read/write access to the persisted balance
pub trait BalanceStore {
    /// Read the current balance
    ///
    /// If nothing has been persisted yet, [`DEFAULT_BALANCE`] is written first
    /// and then returned.
    fn read_balance(&self) -> LedgerResult<Money>;

    /// Replace the persisted balance
    fn write_balance(&self, amount: Money) -> LedgerResult<()>;
}

/// On-disk layout of the balance file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct BalanceRecord {
    balance: f64,
}

/// Check that an amount may be persisted
fn check_storable(amount: Money) -> Result<(), String> {
    if amount.is_negative() {
        Err(format!("balance {} is negative", amount))
    } else if amount > MAX_BALANCE {
        Err(format!("balance {} exceeds the maximum of {}", amount, MAX_BALANCE))
    } else {
        Ok(())
    }
}

/// Balance store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileBalanceStore {
    path: PathBuf,
}

impl FileBalanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the balance file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the balance file has been created yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl BalanceStore for FileBalanceStore {
    fn read_balance(&self) -> LedgerResult<Money> {
        if !self.exists() {
            tracing::debug!(
                path = %self.path.display(),
                "balance file missing, initializing with {}",
                DEFAULT_BALANCE
            );
            self.write_balance(DEFAULT_BALANCE)?;
        }

        let record: BalanceRecord = read_json(&self.path)?;
        let balance = Money::from_f64(record.balance)
            .ok_or_else(|| LedgerError::corrupt(&self.path, "balance is not a representable number"))?;
        check_storable(balance).map_err(|reason| LedgerError::corrupt(&self.path, reason))?;

        tracing::debug!(path = %self.path.display(), %balance, "read balance");
        Ok(balance)
    }

    fn write_balance(&self, amount: Money) -> LedgerResult<()> {
        check_storable(amount).map_err(LedgerError::Storage)?;

        let record = BalanceRecord {
            balance: amount.to_f64(),
        };
        write_json_atomic(&self.path, &record)?;

        tracing::debug!(path = %self.path.display(), balance = %amount, "wrote balance");
        Ok(())
    }
}

/// Balance store held in memory
///
/// Follows the same default-initialization contract as [`FileBalanceStore`].
#[derive(Debug, Default)]
pub struct MemoryBalanceStore {
    balance: Cell<Option<Money>>,
    writes: Cell<usize>,
}

impl MemoryBalanceStore {
    /// Create an empty store; the first read initializes it
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `balance`
    pub fn with_balance(balance: Money) -> Self {
        Self {
            balance: Cell::new(Some(balance)),
            writes: Cell::new(0),
        }
    }

    /// Number of successful writes, including default initialization
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl BalanceStore for MemoryBalanceStore {
    fn read_balance(&self) -> LedgerResult<Money> {
        match self.balance.get() {
            Some(balance) => Ok(balance),
            None => {
                self.write_balance(DEFAULT_BALANCE)?;
                Ok(DEFAULT_BALANCE)
            }
        }
    }

    fn write_balance(&self, amount: Money) -> LedgerResult<()> {
        check_storable(amount).map_err(LedgerError::Storage)?;
        self.balance.set(Some(amount));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, FileBalanceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBalanceStore::new(temp_dir.path().join("balance.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_first_read_initializes_default() {
        let (_temp_dir, store) = create_test_store();
        assert!(!store.exists());

        assert_eq!(store.read_balance().unwrap(), DEFAULT_BALANCE);
        assert!(store.exists());

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "balance": 1000.0 }));

        // Second read finds the persisted default
        assert_eq!(store.read_balance().unwrap(), Money::from_cents(100000));
    }

    #[test]
    fn test_file_layout() {
        let (_temp_dir, store) = create_test_store();
        store.write_balance(Money::from_cents(125050)).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{\n  \"balance\": 1250.5\n}");
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, store) = create_test_store();

        for cents in [0, 1, 10, 99, 100, 25050, 123456789, 999999999999, MAX_BALANCE.cents()] {
            let amount = Money::from_cents(cents);
            store.write_balance(amount).unwrap();
            assert_eq!(store.read_balance().unwrap(), amount);
        }
    }

    #[test]
    fn test_reads_hand_written_file() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{ "balance": 42 }"#).unwrap();

        assert_eq!(store.read_balance().unwrap(), Money::from_cents(4200));
    }

    #[test]
    fn test_corrupt_file_is_not_overwritten() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "{ \"balance\": ").unwrap();

        let err = store.read_balance().unwrap_err();
        assert!(err.is_corrupt());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ \"balance\": ");
    }

    #[test]
    fn test_missing_field_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{ "amount": 10.0 }"#).unwrap();

        assert!(store.read_balance().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_negative_persisted_balance_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{ "balance": -5.0 }"#).unwrap();

        assert!(store.read_balance().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_oversized_persisted_balance_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{ "balance": 1e20 }"#).unwrap();

        assert!(store.read_balance().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_write_rejects_unstorable_amounts() {
        let (_temp_dir, store) = create_test_store();

        assert!(store.write_balance(Money::from_cents(-1)).is_err());
        assert!(store
            .write_balance(MAX_BALANCE + Money::from_cents(1))
            .is_err());
        assert!(!store.exists());
    }

    #[test]
    fn test_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileBalanceStore::new(blocker.join("balance.json"));

        assert!(matches!(
            store.read_balance().unwrap_err(),
            LedgerError::Storage(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_in_place_of_file_is_not_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBalanceStore::new(temp_dir.path());

        let err = store.read_balance().unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)), "got {:?}", err);
    }

    #[test]
    fn test_memory_store_initializes_default() {
        let store = MemoryBalanceStore::new();
        assert_eq!(store.write_count(), 0);

        assert_eq!(store.read_balance().unwrap(), DEFAULT_BALANCE);
        assert_eq!(store.write_count(), 1);

        assert_eq!(store.read_balance().unwrap(), DEFAULT_BALANCE);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryBalanceStore::with_balance(Money::from_cents(500));
        assert_eq!(store.read_balance().unwrap(), Money::from_cents(500));

        store.write_balance(Money::zero()).unwrap();
        assert_eq!(store.read_balance().unwrap(), Money::zero());
        assert!(store.write_balance(Money::from_cents(-1)).is_err());
        assert_eq!(store.read_balance().unwrap(), Money::zero());
    }
}
