//! Persistence port for the task list.
//!
//! # Responsibility
//! - Define the load/save contract the controller persists through.
//! - Decode persisted blobs defensively: storage content is untrusted.
//!
//! # Invariants
//! - The full task list is the unit of persistence; there are no partial
//!   or incremental writes.
//! - A blob that cannot be decoded as the expected array shape is treated
//!   as unrecoverable and replaced by the empty list, never propagated as
//!   a fault.

use crate::db::DbError;
use crate::model::task::Task;
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryTaskStore;
pub use sqlite::SqliteTaskStore;

/// Storage key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for persistence-port operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Abstraction over the key-value byte store that persists the task list.
///
/// The controller is generic over this trait so mutator logic can be
/// tested against [`MemoryTaskStore`] without a real storage backend.
pub trait TaskStore {
    /// Reads the persisted blob; absent blob yields an empty list.
    fn load(&self) -> StoreResult<Vec<Task>>;

    /// Serializes the full list and replaces any prior blob.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

impl<T: TaskStore + ?Sized> TaskStore for &T {
    fn load(&self) -> StoreResult<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        (**self).save(tasks)
    }
}

/// Serializes the task list into its persisted JSON-array form.
pub(crate) fn encode_blob(tasks: &[Task]) -> StoreResult<String> {
    serde_json::to_string(tasks).map_err(StoreError::Encode)
}

/// Decodes a persisted blob, degrading to empty on malformed content.
///
/// Duplicate ids are sanitized by keeping the first occurrence, so the
/// one-task-per-id invariant holds even for hand-edited storage.
pub(crate) fn decode_blob(blob: &str) -> Vec<Task> {
    let tasks: Vec<Task> = match serde_json::from_str(blob) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("event=store_load module=store status=fallback reason=malformed_blob error={err}");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut sanitized = Vec::with_capacity(tasks.len());
    for task in tasks {
        if seen.insert(task.id) {
            sanitized.push(task);
        } else {
            warn!(
                "event=store_load module=store status=sanitized reason=duplicate_id id={}",
                task.id
            );
        }
    }
    sanitized
}
