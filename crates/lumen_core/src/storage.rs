//! Key-value preference storage collaborator
//!
//! The theme provider persists a single preference through this trait. Hosts
//! plug in their own backend; [`MemoryStore`] serves tests and ephemeral
//! sessions.

use crate::error::StoreError;
use rustc_hash::FxHashMap;
use std::sync::RwLock;

/// String key-value storage for user preferences
///
/// Implementations must not block the caller for long; a backend that talks
/// to slow storage should queue the write and return.
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value, `Ok(None)` when the key is absent
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`PreferenceStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, useful for simulating a previous session
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tracing::trace!(key, value, "preference saved");
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new().with_entry("theme_mode", "dark");
        assert_eq!(store.load("theme_mode").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("missing").unwrap(), None);

        store.save("theme_mode", "light").unwrap();
        assert_eq!(store.get("theme_mode").as_deref(), Some("light"));
    }
}
