//! `localStorage` adapter for the session store.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR paths read nothing and refuse writes, so a
//! server render always looks signed out and pages defer their gate to the
//! client.

use workflow::session::StorageError;
use workflow::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StorageError("localStorage unavailable".to_owned()))?;
            storage.set_item(key, value).map_err(|e| StorageError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError("localStorage unavailable".to_owned()))
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
