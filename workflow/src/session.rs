//! Session persistence: the single source of truth for the bearer token.
//!
//! DESIGN
//! ======
//! The token lives only in a [`KeyValueStore`] (browser `localStorage`, a
//! JSON file for the CLI, memory in tests). Pages read it on mount and never
//! cache it; login and logout are the only writers.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TOKEN_KEY: &str = "school.token";
pub const USER_ID_KEY: &str = "school.user_id";
pub const USER_KEY: &str = "school.user";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_ID_KEY, USER_KEY];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session storage failed: {0}")]
pub struct StorageError(pub String);

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// Process-local store, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Everything persisted for a signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub user_info: Value,
}

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current bearer token, if any. Blank tokens count as absent.
    pub fn get(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    /// Persist token and user metadata.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if any key cannot be written; partial writes
    /// are rolled back so a half-written session never reads as signed in.
    pub fn set(&self, token: &str, user_id: &str, user_info: &Value) -> Result<(), StorageError> {
        let info = serde_json::to_string(user_info).map_err(|e| StorageError(e.to_string()))?;
        let written = self
            .store
            .set(USER_ID_KEY, user_id)
            .and_then(|()| self.store.set(USER_KEY, &info))
            .and_then(|()| self.store.set(TOKEN_KEY, token));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Remove every session key.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }

    /// Token plus user metadata. `user_info` is `null` when it was never
    /// stored or no longer parses.
    pub fn current(&self) -> Option<Session> {
        let token = self.get()?;
        let user_id = self.store.get(USER_ID_KEY).unwrap_or_default();
        let user_info = self
            .store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(Value::Null);
        Some(Session { token, user_id, user_info })
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
