//! `localStorage` backed key/value store.

use placid_core::{CoreError, KeyValueStore};
use web_sys::Storage;

use crate::error::describe;

/// The window's `localStorage`.
///
/// Storage can be unavailable (private browsing, sandboxed frames); reads then
/// return nothing and writes fail with a storage error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> placid_core::Result<()> {
        let storage =
            Self::storage().ok_or_else(|| CoreError::storage(key, "localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| CoreError::storage(key, describe(&err)))
    }
}
