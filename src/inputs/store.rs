//! JSON-backed persistence for the input record
//!
//! The dashboard reads one record at startup and rewrites the file after
//! every committed change. A missing or unparsable file is treated as
//! absent and silently replaced with the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::data::InputRecord;

/// Default state file name, the CLI analog of the page's storage key
pub const DEFAULT_STATE_FILE: &str = "seve_inputs.json";

/// Failures while writing the state file. Loading never fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize inputs: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store for a single [`InputRecord`]
#[derive(Debug, Clone)]
pub struct InputStore {
    path: PathBuf,
}

impl InputStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default state file in the working directory
    pub fn default_location() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved record, falling back to the defaults when the file is
    /// absent, unreadable, or does not parse.
    pub fn load(&self) -> InputRecord {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return InputRecord::default(),
        };

        match serde_json::from_str(&text) {
            Ok(record) => record,
            Err(err) => {
                log::warn!(
                    "ignoring unparsable state file {}: {}",
                    self.path.display(),
                    err
                );
                InputRecord::default()
            }
        }
    }

    /// Persist the record as pretty-printed JSON
    pub fn save(&self, record: &InputRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = InputStore::new(dir.path().join("inputs.json"));

        let mut record = InputRecord::default();
        record.sales_goal = 750_000.0;
        record.months = 9;
        record.rates.close_rate = 0.45;

        store.save(&record).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, record);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = InputStore::new(dir.path().join("absent.json"));

        assert_eq!(store.load(), InputRecord::default());
    }

    #[test]
    fn test_garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = InputStore::new(&path);
        assert_eq!(store.load(), InputRecord::default());
    }
}
