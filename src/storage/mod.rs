//! Storage layer for the expense tracker
//!
//! The store persists through the [`KeyValueStore`] trait: a flat map from
//! key to serialized JSON text. [`FileStore`] keeps one file per key with
//! atomic writes; [`MemoryStore`] keeps everything in a `HashMap`.

pub mod file;
pub mod file_io;
pub mod memory;

pub use file::FileStore;
pub use file_io::{read_text, write_text_atomic};
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Key holding the serialized expense sequence
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the serialized category sequence
pub const CATEGORIES_KEY: &str = "categories";

/// Key holding the serialized monthly budget
pub const BUDGET_KEY: &str = "budget";

/// Durable key-value persistence used by the expense store
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, or `None` if absent
    fn load(&self, key: &str) -> Result<Option<String>, ExpenseError>;

    /// Replace the value stored under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<(), ExpenseError>;
}

/// Load and deserialize the value under `key`
///
/// Returns `Ok(None)` when the key is absent and an error when the stored
/// text cannot be read or parsed.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, ExpenseError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ExpenseError::Storage(format!("Failed to parse '{}': {}", key, e))),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), ExpenseError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize '{}': {}", key, e)))?;
    store.save(key, &text)
}
