//! Persistence of the most recently generated game.
//!
//! Platform shells provide a [`KeyValueStore`] (browser `localStorage`, an
//! in-memory map for tests and the tester CLI). [`GameVault`] layers the
//! fixed-key save and the self-healing hydrate on top of it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::model::GeneratedGame;

pub const DEFAULT_STORAGE_KEY: &str = "whodunit.last_game";

/// Trait for abstracting durable string storage.
/// Platform-specific implementations should provide this.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// What startup found under the storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    Empty,
    Restored(Box<GeneratedGame>),
    /// A stored entry was unreadable and has been deleted.
    Discarded,
}

/// Fixed-key save slot for the last generated game.
#[derive(Debug, Clone)]
pub struct GameVault<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GameVault<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the slot with `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be serialized or written. Callers
    /// treat this as best-effort and only log it.
    pub fn persist(&self, game: &GeneratedGame) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(game).map_err(|err| StorageError::Write(err.to_string()))?;
        self.store.set_item(&self.key, &json)
    }

    /// Load the saved game, deleting the entry if it cannot be used.
    ///
    /// Never fails: an unreachable store reads as [`Hydration::Empty`].
    pub fn hydrate(&self) -> Hydration {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Hydration::Empty,
            Err(err) => {
                log::warn!("could not read saved game: {err}");
                return Hydration::Empty;
            }
        };

        let usable = GeneratedGame::from_json(&raw)
            .map_err(|err| err.to_string())
            .and_then(|game| game.validate().map(|()| game).map_err(|e| e.to_string()));
        match usable {
            Ok(game) => Hydration::Restored(Box::new(game)),
            Err(reason) => {
                log::warn!("discarding corrupted saved game: {reason}");
                if let Err(err) = self.store.remove_item(&self.key) {
                    log::warn!("could not delete corrupted saved game: {err}");
                }
                Hydration::Discarded
            }
        }
    }

    /// Remove the saved game, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(&self.key)
    }
}

/// Shared in-memory store. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising degraded paths.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable(String::from("memory store disabled")))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_game;

    #[test]
    fn persist_then_hydrate_restores_game() {
        let store = MemoryStore::new();
        let vault = GameVault::new(store.clone());
        let game = sample_game();
        vault.persist(&game).unwrap();
        assert!(store.contains(DEFAULT_STORAGE_KEY));
        assert_eq!(vault.hydrate(), Hydration::Restored(Box::new(game)));
    }

    #[test]
    fn persist_overwrites_previous_game() {
        let vault = GameVault::new(MemoryStore::new());
        let mut first = sample_game();
        first.title = String::from("First");
        let mut second = sample_game();
        second.title = String::from("Second");
        vault.persist(&first).unwrap();
        vault.persist(&second).unwrap();
        match vault.hydrate() {
            Hydration::Restored(game) => assert_eq!(game.title, "Second"),
            other => panic!("expected restored game, got {other:?}"),
        }
    }

    #[test]
    fn empty_store_hydrates_to_empty() {
        let vault = GameVault::new(MemoryStore::new());
        assert_eq!(vault.hydrate(), Hydration::Empty);
    }

    #[test]
    fn corrupted_entry_is_deleted() {
        let store = MemoryStore::new();
        store.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let vault = GameVault::new(store.clone());
        assert_eq!(vault.hydrate(), Hydration::Discarded);
        assert!(!store.contains(DEFAULT_STORAGE_KEY));
        assert_eq!(vault.hydrate(), Hydration::Empty);

        vault.persist(&sample_game()).unwrap();
        assert!(matches!(vault.hydrate(), Hydration::Restored(_)));
    }

    #[test]
    fn schema_violations_are_treated_as_corruption() {
        let store = MemoryStore::new();
        let mut game = sample_game();
        game.solution.murderer_id = String::from("nobody");
        store
            .set_item(DEFAULT_STORAGE_KEY, &serde_json::to_string(&game).unwrap())
            .unwrap();
        let vault = GameVault::new(store.clone());
        assert_eq!(vault.hydrate(), Hydration::Discarded);
        assert!(store.is_empty());
    }

    #[test]
    fn unavailable_store_degrades_quietly() {
        let vault = GameVault::new(MemoryStore::unavailable());
        assert_eq!(vault.hydrate(), Hydration::Empty);
        assert!(vault.persist(&sample_game()).is_err());
    }

    #[test]
    fn custom_key_is_respected() {
        let store = MemoryStore::new();
        let vault = GameVault::with_key(store.clone(), "other.key");
        vault.persist(&sample_game()).unwrap();
        assert!(store.contains("other.key"));
        assert!(!store.contains(DEFAULT_STORAGE_KEY));
        vault.clear().unwrap();
        assert!(store.is_empty());
    }
}
