//! Directory-backed key-value storage
//!
//! Each key is stored as `<dir>/<key>.json`.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

use super::file_io::{read_text, write_text_atomic};
use super::KeyValueStore;

/// Durable storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ExpenseError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ExpenseError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        read_text(self.path_for(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ExpenseError> {
        write_text_atomic(self.path_for(key)?, value)
    }
}
