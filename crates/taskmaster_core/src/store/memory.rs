//! In-memory task store fake.
//!
//! Backs the controller in tests so mutator logic runs without a real
//! storage backend. The raw blob is observable, which lets tests assert
//! the write-through invariant: after every mutator, decoding the last
//! persisted blob must reproduce the in-memory list.

use super::{decode_blob, encode_blob, StoreResult, TaskStore};
use crate::model::task::Task;
use std::cell::RefCell;

/// Task store holding the serialized blob in process memory.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    blob: RefCell<Option<String>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a raw blob, as if a previous
    /// session (or foreign writer) had persisted it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// Returns the last persisted blob, if any.
    pub fn raw_blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        match self.blob.borrow().as_deref() {
            Some(blob) => Ok(decode_blob(blob)),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let blob = encode_blob(tasks)?;
        *self.blob.borrow_mut() = Some(blob);
        Ok(())
    }
}
