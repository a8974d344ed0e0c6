//! `localStorage` adapter for the game vault.

use crate::dom;
use whodunit_game::{GameVault, KeyValueStore, StorageError};

/// Browser `localStorage`. Each call looks the handle up again, so a store
/// disabled mid-session degrades to errors instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebStorage;

fn unavailable(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(dom::js_error_message(err))
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().map_err(|e| unavailable(&e))?;
        storage.get_item(key).map_err(|e| unavailable(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().map_err(|e| unavailable(&e))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(dom::js_error_message(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().map_err(|e| unavailable(&e))?;
        storage.remove_item(key).map_err(|e| unavailable(&e))
    }
}

/// The vault for this build's storage key.
#[must_use]
pub fn browser_vault(storage_key: &str) -> GameVault<WebStorage> {
    GameVault::with_key(WebStorage, storage_key)
}
