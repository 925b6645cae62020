//! Key/value persistence used for the theme preference.
//!
//! The browser runtime backs this with `localStorage`; tests and non-browser
//! hosts use [`MemoryStore`].

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::Result;

/// A string key/value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("placid-theme"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let store = MemoryStore::new();
        store.set("placid-theme", "dark").unwrap();
        store.set("placid-theme", "light").unwrap();
        assert_eq!(store.get("placid-theme").as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::with_entry("placid-theme", "dark");
        let clone = store.clone();
        clone.set("other", "value").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_through_reference_and_rc() {
        let store = Rc::new(MemoryStore::new());
        let by_ref: &dyn KeyValueStore = &*store;
        by_ref.set("k", "v").unwrap();
        assert_eq!(KeyValueStore::get(&store, "k").as_deref(), Some("v"));
    }
}
