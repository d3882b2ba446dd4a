use super::*;
use workflow::SessionStore;

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));
    assert_eq!(store.get("school.token"), None);
}

#[test]
fn values_survive_a_new_store_on_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    FileStore::new(&path).set("school.token", "abc").unwrap();
    assert_eq!(FileStore::new(&path).get("school.token").as_deref(), Some("abc"));
}

#[test]
fn clearing_the_session_deletes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let session = SessionStore::new(FileStore::new(&path));
    session.set("tok", "3", &serde_json::json!({ "username": "admin" })).unwrap();
    assert!(path.exists());
    session.clear();
    assert!(!path.exists());
    assert_eq!(session.get(), None);
}

#[test]
fn corrupt_file_reads_as_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(SessionStore::new(FileStore::new(&path)).get(), None);
}
