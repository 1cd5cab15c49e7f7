//! In-memory key-value storage

use std::collections::HashMap;

use crate::error::ExpenseError;

use super::KeyValueStore;

/// Volatile storage, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without going through a store
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ExpenseError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        store.save("budget", "1000.0").unwrap();
        store.save("budget", "500.0").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load("budget").unwrap().as_deref(), Some("500.0"));
    }

    #[test]
    fn test_seeded_entry() {
        let store = MemoryStore::new().with_entry("expenses", "[]");
        assert_eq!(store.get("expenses"), Some("[]"));
        assert_eq!(store.get("categories"), None);
    }
}
