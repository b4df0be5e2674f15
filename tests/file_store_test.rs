use std::fs;
use tempfile::TempDir;
use userdir::api::DirectoryApi;
use userdir::error::UserdirError;
use userdir::model::{Role, Status, UserDraft};
use userdir::store::fs::FileStore;
use userdir::store::record_store::RecordStore;
use userdir::store::KeyValueStore;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[test]
fn test_file_store_basic_io() {
    let (dir, mut store) = setup();

    assert_eq!(store.get_item("users").unwrap(), None);

    store.set_item("users", "[]").unwrap();
    assert_eq!(store.get_item("users").unwrap(), Some("[]".to_string()));
    assert!(dir.path().join("users.json").exists());

    store.remove_item("users").unwrap();
    assert_eq!(store.get_item("users").unwrap(), None);
    store.remove_item("users").unwrap();
}

#[test]
fn test_file_store_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileStore::new(nested.clone());
    store.set_item("users", "[]").unwrap();
    assert!(nested.join("users.json").exists());
}

#[test]
fn test_file_store_leaves_no_tmp_files() {
    let (dir, mut store) = setup();
    store.set_item("users", "[1]").unwrap();
    store.set_item("users", "[2]").unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(store.get_item("users").unwrap(), Some("[2]".to_string()));
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let (_dir, mut store) = setup();
    for key in ["", "../users", "a/b", "users.json"] {
        assert!(
            matches!(store.set_item(key, "[]"), Err(UserdirError::Store(_))),
            "key {:?} should be rejected",
            key
        );
    }
}

#[test]
fn test_collection_survives_reopen() {
    let (dir, store) = setup();
    let mut api = DirectoryApi::open(store, "users").unwrap();
    api.create_user(&UserDraft::new(
        "Ann",
        "ann@x.co",
        "12345",
        Role::Admin,
        Status::Active,
    ))
    .unwrap();
    api.create_user(&UserDraft::new(
        "Bo",
        "bo@x.co",
        "999",
        Role::User,
        Status::Inactive,
    ))
    .unwrap();
    let before = api.records().to_vec();

    let reopened = RecordStore::open(FileStore::new(dir.path().to_path_buf()), "users").unwrap();
    assert_eq!(reopened.records(), before.as_slice());
    assert_eq!(reopened.records()[0].name, "Bo");
}

#[test]
fn test_reads_existing_collection() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("users.json"),
        r#"[{"id":1718000000001,"name":"Bo","email":"bo@x.co","phone":"999","role":"User","status":"Inactive"},
            {"id":1718000000000,"name":"Ann","email":"ann@x.co","phone":"12345","role":"Admin","status":"Active"}]"#,
    )
    .unwrap();

    let api = DirectoryApi::open(store, "users").unwrap();
    let names: Vec<_> = api.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bo", "Ann"]);
    let stats = api.current_stats();
    assert_eq!((stats.total, stats.active, stats.inactive), (2, 1, 1));
}

#[test]
fn test_persisted_json_shape() {
    let (dir, store) = setup();
    let mut api = DirectoryApi::open(store, "users").unwrap();
    api.create_user(&UserDraft::new(
        "Ann",
        "ann@x.co",
        "12345",
        Role::Admin,
        Status::Active,
    ))
    .unwrap();

    let raw = fs::read_to_string(dir.path().join("users.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];
    let mut keys: Vec<_> = entry.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["email", "id", "name", "phone", "role", "status"]);
    assert!(entry["id"].is_u64());
    assert_eq!(entry["role"], "Admin");
    assert_eq!(entry["status"], "Active");
}

#[test]
fn test_malformed_file_fails_to_open() {
    let (dir, store) = setup();
    fs::write(dir.path().join("users.json"), "not json").unwrap();
    assert!(matches!(
        DirectoryApi::open(store, "users"),
        Err(UserdirError::Serialization(_))
    ));
}
