use taskmaster_core::db::migrations::{apply_migrations, latest_version};
use taskmaster_core::db::{open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn latest_version_is_positive() {
    assert!(latest_version() > 0);
}

#[test]
fn open_db_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let has_kv_store: bool = conn
        .query_row(
            "SELECT EXISTS (
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(has_kv_store);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    let future = latest_version() + 1;
    conn.execute_batch(&format!("PRAGMA user_version = {future};"))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, future);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
