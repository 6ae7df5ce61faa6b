//! Persistence gateway
//!
//! The engine only ever talks to an opaque string key-value store. This module
//! defines that capability ([`KeyValueStore`]), two backends, and the typed
//! [`Persistence`] wrapper that maps the three persisted records onto it.
//!
//! Persistence never fails into the caller: read failures are logged and fall
//! back to empty defaults, write failures are logged and dropped.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::StorageError;
use crate::types::{User, Word};

/// Key of the users record (JSON array of users)
pub const USERS_KEY: &str = "english-flashcards-users";
/// Key of the current-user record (JSON user object, absent when none selected)
pub const CURRENT_USER_KEY: &str = "english-flashcards-current-user";
/// Key of the words record (JSON array of words)
pub const WORDS_KEY: &str = "english-flashcards-words";

pub const ALL_KEYS: [&str; 3] = [USERS_KEY, CURRENT_USER_KEY, WORDS_KEY];

/// Synchronous string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Typed access to the persisted users, current user and words records
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn load_users(&self) -> Vec<User> {
        self.load_or_default(USERS_KEY, "users")
    }

    pub fn save_users(&mut self, users: &[User]) {
        self.save(USERS_KEY, "users", &users);
    }

    pub fn load_current_user(&self) -> Option<User> {
        self.load_or_default(CURRENT_USER_KEY, "current user")
    }

    /// Persist the selected user; `None` removes the record
    pub fn save_current_user(&mut self, user: Option<&User>) {
        match user {
            Some(user) => self.save(CURRENT_USER_KEY, "current user", user),
            None => {
                if let Err(e) = self.store.remove(CURRENT_USER_KEY) {
                    error!("Error saving current user to storage: {}", e);
                }
            }
        }
    }

    pub fn load_words(&self) -> Vec<Word> {
        self.load_or_default(WORDS_KEY, "words")
    }

    pub fn save_words(&mut self, words: &[Word]) {
        self.save(WORDS_KEY, "words", &words);
    }

    /// Remove every record this engine owns
    pub fn clear_all(&mut self) {
        for key in ALL_KEYS {
            if let Err(e) = self.store.remove(key) {
                error!("Error clearing {} from storage: {}", key, e);
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str, what: &str) -> T {
        match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No {} record in storage", what);
                T::default()
            }
            Err(e) => {
                error!("Error loading {} from storage: {}", what, e);
                T::default()
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, what: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(key, &json));

        if let Err(e) = result {
            error!("Error saving {} to storage: {}", what, e);
        }
    }
}
