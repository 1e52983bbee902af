//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read JSON from a file, returning an error if the file doesn't exist
///
/// A file that exists but does not deserialize into `T` is reported as
/// [`LedgerError::Corrupt`]; failures reading the bytes are storage errors.
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e))
        } else {
            LedgerError::corrupt(path, e.to_string())
        }
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        LedgerError::Storage(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!(
            "Failed to replace {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(sample(), loaded);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }

    #[test]
    fn test_read_invalid_json_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_corrupt());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = read_json::<TestData, _>(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)), "got {:?}", err);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        let updated = TestData {
            name: "updated".to_string(),
            value: 7,
        };
        write_json_atomic(&path, &updated).unwrap();

        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(loaded, updated);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let err = write_json_atomic(blocker.join("test.json"), &sample()).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
