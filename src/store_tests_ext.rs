use super::{
    KeyValueStore, MemoryKeyValueStore, ProjectStore, ReadError, SqliteKeyValueStore,
    DEFAULT_STORAGE_KEY,
};
use crate::domain::project::Project;
use crate::seed::default_projects;

fn store_with(raw: Option<&str>) -> ProjectStore<MemoryKeyValueStore> {
    let kv = MemoryKeyValueStore::default();
    if let Some(raw) = raw {
        kv.set(DEFAULT_STORAGE_KEY, raw).expect("seed write");
    }
    ProjectStore::new(kv, DEFAULT_STORAGE_KEY)
}

fn sample() -> Vec<Project> {
    vec![
        Project {
            id: "p_1".to_string(),
            title: "Ünïcode Title".to_string(),
            description: "Quotes \"inside\" and, commas".to_string(),
            date: "".to_string(),
            tags: vec!["Mixed".to_string(), "case".to_string()],
        },
        Project {
            id: "p_2".to_string(),
            title: "Second".to_string(),
            description: "Two".to_string(),
            date: "2025-01-31".to_string(),
            tags: Vec::new(),
        },
    ]
}

#[test]
fn load_on_empty_storage_returns_defaults_every_time() {
    let store = store_with(None);
    assert_eq!(store.load(), default_projects());
    assert_eq!(store.load(), default_projects());
    assert_eq!(store.load().len(), 3);
    assert!(matches!(store.read(), Err(ReadError::Missing)));
}

#[test]
fn load_on_corrupt_storage_returns_defaults() {
    for raw in ["{not json", "{\"id\":\"p_1\"}", "42", "null", "", "[{\"title\":1}]"] {
        let store = store_with(Some(raw));
        assert_eq!(store.load(), default_projects(), "raw blob: {raw}");
    }
}

#[test]
fn read_reports_the_reason_for_unusable_blobs() {
    assert!(matches!(
        store_with(Some("{broken")).read(),
        Err(ReadError::Json(_))
    ));
    assert!(matches!(
        store_with(Some("{\"a\":1}")).read(),
        Err(ReadError::NotASequence)
    ));
    assert!(matches!(
        store_with(Some("[{\"no_id\":true}]")).read(),
        Err(ReadError::InvalidRecord(_))
    ));
}

#[test]
fn storage_access_failure_falls_back_to_defaults() {
    let kv = MemoryKeyValueStore {
        fail_reads: true,
        ..MemoryKeyValueStore::default()
    };
    let store = ProjectStore::new(kv, DEFAULT_STORAGE_KEY);
    assert!(matches!(store.read(), Err(ReadError::Storage(_))));
    assert_eq!(store.load(), default_projects());
}

#[test]
fn save_then_load_round_trips() {
    let store = store_with(None);
    let projects = sample();
    store.save(&projects).expect("save should succeed");
    assert_eq!(store.load(), projects);
}

#[test]
fn empty_array_is_a_valid_collection() {
    let store = store_with(Some("[]"));
    assert!(store.load().is_empty());
}

#[test]
fn save_overwrites_previous_blob() {
    let store = store_with(None);
    store.save(&sample()).expect("first save");
    store.save(&sample()[1..]).expect("second save");
    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "p_2");
}

#[test]
fn clear_forgets_the_collection() {
    let store = store_with(None);
    store.save(&sample()).expect("save");
    store.clear().expect("clear");
    assert_eq!(store.load(), default_projects());
}

#[test]
fn blob_is_a_plain_json_array() {
    let kv = MemoryKeyValueStore::default();
    let store = ProjectStore::new(kv, "custom.key");
    store.save(&sample()[1..]).expect("save");
    assert_eq!(store.key(), "custom.key");
    let raw = store
        .kv
        .get("custom.key")
        .expect("read")
        .expect("blob should exist");
    assert_eq!(
        raw,
        r#"[{"id":"p_2","title":"Second","description":"Two","date":"2025-01-31","tags":[]}]"#
    );
}

#[test]
fn sqlite_backend_round_trips() {
    let kv = SqliteKeyValueStore::in_memory().expect("in-memory store should open");
    let store = ProjectStore::new(kv, DEFAULT_STORAGE_KEY);
    assert_eq!(store.load(), default_projects());
    store.save(&sample()).expect("save");
    assert_eq!(store.load(), sample());
}

#[test]
fn null_optional_fields_keep_the_stored_record() {
    let store = store_with(Some(
        r#"[{"id":"p_u","title":"Mine","description":null,"date":null,"tags":null}]"#,
    ));
    let loaded = store.read().expect("null optional fields should read");
    assert_eq!(
        loaded,
        vec![Project {
            id: "p_u".to_string(),
            title: "Mine".to_string(),
            description: String::new(),
            date: String::new(),
            tags: Vec::new(),
        }]
    );
    assert_eq!(store.load(), loaded);
}
