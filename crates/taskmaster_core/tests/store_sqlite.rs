use taskmaster_core::db::migrations::latest_version;
use taskmaster_core::db::{open_db, open_db_in_memory};
use taskmaster_core::{Priority, SqliteTaskStore, StoreError, Task, TaskStore};
use rusqlite::Connection;
use uuid::Uuid;

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::with_id(Uuid::from_u128(1), "done", Priority::High, 1_700_000_000_000);
    done.completed = true;
    let open = Task::with_id(Uuid::from_u128(2), "open", Priority::Low, 1_700_000_001_000);
    vec![done, open]
}

#[test]
fn load_with_no_persisted_blob_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    assert_eq!(store.load().unwrap(), Vec::<Task>::new());
}

#[test]
fn save_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();
    let tasks = sample_tasks();

    store.save(&tasks).unwrap();
    assert_eq!(store.load().unwrap(), tasks);
}

#[test]
fn save_replaces_the_prior_blob_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    store.save(&sample_tasks()).unwrap();
    let shorter = vec![Task::with_id(
        Uuid::from_u128(9),
        "only survivor",
        Priority::Medium,
        1_700_000_002_000,
    )];
    store.save(&shorter).unwrap();

    assert_eq!(store.load().unwrap(), shorter);
}

#[test]
fn malformed_blob_degrades_to_empty_list() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('tasks', 'not json at all');",
        [],
    )
    .unwrap();

    let store = SqliteTaskStore::try_new(&conn).unwrap();
    assert_eq!(store.load().unwrap(), Vec::<Task>::new());
}

#[test]
fn foreign_shaped_blob_degrades_to_empty_list() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('tasks', '{\"version\": 2}');",
        [],
    )
    .unwrap();

    let store = SqliteTaskStore::try_new(&conn).unwrap();
    assert_eq!(store.load().unwrap(), Vec::<Task>::new());
}

#[test]
fn duplicate_ids_in_blob_keep_the_first_occurrence() {
    let id = Uuid::from_u128(7);
    let first = Task::with_id(id, "first", Priority::Medium, 1_700_000_000_000);
    let second = Task::with_id(id, "second", Priority::Medium, 1_700_000_001_000);
    let blob = serde_json::to_string(&[first.clone(), second]).unwrap();

    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('tasks', ?1);",
        [blob],
    )
    .unwrap();

    let store = SqliteTaskStore::try_new(&conn).unwrap();
    assert_eq!(store.load().unwrap(), vec![first]);
}

#[test]
fn try_new_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteTaskStore::try_new(&conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn try_new_rejects_connection_without_kv_store_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("kv_store"))
    ));
}

#[test]
fn blob_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("taskmaster.db");
    let tasks = sample_tasks();

    {
        let conn = open_db(&db_path).unwrap();
        let store = SqliteTaskStore::try_new(&conn).unwrap();
        store.save(&tasks).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();
    assert_eq!(store.load().unwrap(), tasks);
}
