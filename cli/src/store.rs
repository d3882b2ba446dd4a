//! File-backed session storage for the terminal front end.
//!
//! DESIGN
//! ======
//! The whole store is one flat JSON object rewritten on every change. It only
//! ever holds the three session keys, so there is nothing to gain from
//! anything finer grained. A missing or unreadable file reads as empty, which
//! means "signed out".

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use workflow::session::StorageError;
use workflow::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(path = %self.path.display(), %error, "ignoring unreadable session file");
            BTreeMap::new()
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|e| StorageError(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StorageError(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read();
        entries.insert(key.to_owned(), value.to_owned());
        self.write(&entries)
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read();
        if entries.remove(key).is_none() {
            return;
        }
        let result = if entries.is_empty() {
            fs::remove_file(&self.path).map_err(|e| StorageError(e.to_string()))
        } else {
            self.write(&entries)
        };
        if let Err(error) = result {
            tracing::warn!(path = %self.path.display(), %error, "failed to update session file");
        }
    }
}
