use super::*;
use serde_json::json;

/// Store that refuses writes to one key.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryStore,
    refuse: &'static str,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.refuse {
            return Err(StorageError("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

#[test]
fn empty_store_has_no_token() {
    let session = SessionStore::new(MemoryStore::default());
    assert_eq!(session.get(), None);
    assert!(session.current().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn set_then_get_round_trips_token_and_user() {
    let session = SessionStore::new(MemoryStore::default());
    session.set("tok-1", "7", &json!({ "username": "admin" })).unwrap();
    assert_eq!(session.get().as_deref(), Some("tok-1"));
    let current = session.current().unwrap();
    assert_eq!(current.user_id, "7");
    assert_eq!(current.user_info, json!({ "username": "admin" }));
}

#[test]
fn clear_removes_every_key() {
    let store = MemoryStore::default();
    let session = SessionStore::new(store.clone());
    session.set("tok-1", "7", &json!({})).unwrap();
    session.clear();
    for key in [TOKEN_KEY, USER_ID_KEY, USER_KEY] {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
}

#[test]
fn blank_token_counts_as_signed_out() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "   ").unwrap();
    assert_eq!(SessionStore::new(store).get(), None);
}

#[test]
fn unparseable_user_info_reads_as_null() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok").unwrap();
    store.set(USER_KEY, "{not json").unwrap();
    let current = SessionStore::new(store).current().unwrap();
    assert_eq!(current.user_info, Value::Null);
}

#[test]
fn failed_write_leaves_no_partial_session() {
    let store = FlakyStore { inner: MemoryStore::default(), refuse: TOKEN_KEY };
    let session = SessionStore::new(store.clone());
    assert!(session.set("tok", "1", &json!({})).is_err());
    assert_eq!(store.get(USER_ID_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert!(!session.is_authenticated());
}
