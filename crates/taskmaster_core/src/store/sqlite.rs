//! SQLite-backed task store.
//!
//! # Responsibility
//! - Persist the task-list blob under one key of the `kv_store` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The connection must be migration-complete before use; `try_new`
//!   rejects anything else.
//! - `save` replaces the whole blob in a single statement.

use super::{decode_blob, encode_blob, StoreError, StoreResult, TaskStore, TASKS_KEY};
use crate::db::migrations::latest_version;
use crate::model::task::Task;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

/// Task store writing to a single `kv_store` row.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStore<'conn> {
    /// Wraps a migration-complete connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not
    ///   match the latest migration known to this binary.
    /// - `MissingRequiredTable` when `kv_store` is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_table: bool = conn.query_row(
            "SELECT EXISTS (
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Err(StoreError::MissingRequiredTable("kv_store"));
        }

        Ok(Self { conn })
    }
}

impl TaskStore for SqliteTaskStore<'_> {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [TASKS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let tasks = match blob {
            Some(blob) => decode_blob(&blob),
            None => Vec::new(),
        };
        info!(
            "event=store_load module=store status=ok backend=sqlite count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let blob = encode_blob(tasks)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_KEY, blob],
        )?;
        Ok(())
    }
}
