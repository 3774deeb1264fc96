//! Task-list controller: state owner and mutator set.
//!
//! # Responsibility
//! - Own the full task list loaded once at startup.
//! - Apply user mutations and persist the new list synchronously.
//! - Track the transient edit session (at most one at a time).
//!
//! # Invariants
//! - Exactly one task per id for the lifetime of the list.
//! - Every mutator that changes the list persists before returning.
//! - A persistence write fault leaves the in-memory list authoritative;
//!   the error is returned for the caller to surface as a non-fatal
//!   notice.
//! - Mutators that change nothing (absent id, empty trimmed text, nothing
//!   completed) skip the write entirely.

use crate::model::task::{Priority, Task, TaskId};
use crate::store::{StoreResult, TaskStore};
use log::{info, warn};

/// Pending/total tally backing the task counter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    /// Tasks with `completed = false`.
    pub pending: usize,
    /// All tasks, regardless of state.
    pub total: usize,
}

/// Transient edit state: which task is being edited and the draft text.
///
/// Not part of the task entity; discarded on cancel, committed on save.
#[derive(Debug, Clone)]
struct EditSession {
    id: TaskId,
    draft: String,
}

/// Owner of the task list and the only entry point for mutation.
///
/// Generic over the persistence port so tests can run against
/// [`crate::store::MemoryTaskStore`].
pub struct TaskListController<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    editing: Option<EditSession>,
}

impl<S: TaskStore> TaskListController<S> {
    /// Performs the one startup read and takes ownership of the result.
    ///
    /// Malformed persisted content was already degraded to an empty list
    /// by the store; only transport faults propagate here.
    pub fn load(store: S) -> StoreResult<Self> {
        let tasks = store.load()?;
        info!(
            "event=controller_load module=controller status=ok count={}",
            tasks.len()
        );
        Ok(Self {
            store,
            tasks,
            editing: None,
        })
    }

    /// The full list, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Pending/total counter for display.
    pub fn counts(&self) -> TaskCounts {
        let pending = self.tasks.iter().filter(|task| !task.completed).count();
        TaskCounts {
            pending,
            total: self.tasks.len(),
        }
    }

    /// Appends a new pending task and returns its id.
    ///
    /// Whitespace-only text is a validation rejection: `Ok(None)`, list
    /// untouched, nothing persisted.
    pub fn add(&mut self, text: &str, priority: Priority) -> StoreResult<Option<TaskId>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let task = Task::new(trimmed, priority);
        let id = task.id;
        self.tasks.push(task);
        self.persist()?;
        Ok(Some(id))
    }

    /// Removes the matching task; `Ok(false)` when the id is absent.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        // A delete also invalidates any edit session targeting the task.
        if self.editing.as_ref().is_some_and(|session| session.id == id) {
            self.editing = None;
        }

        self.persist()?;
        Ok(true)
    }

    /// Flips `completed` on the matching task; applying twice restores
    /// the original value.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.persist()?;
        Ok(true)
    }

    /// Replaces `priority` on the matching task.
    pub fn change_priority(&mut self, id: TaskId, priority: Priority) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.priority = priority;
        self.persist()?;
        Ok(true)
    }

    /// Removes every completed task; idempotent. Returns the removed count.
    pub fn clear_completed(&mut self) -> StoreResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }

        if self
            .editing
            .as_ref()
            .is_some_and(|session| !self.tasks.iter().any(|task| task.id == session.id))
        {
            self.editing = None;
        }

        self.persist()?;
        Ok(removed)
    }

    /// Opens an edit session on the matching task, seeding the draft with
    /// its current text. Replaces any prior session.
    pub fn start_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            return false;
        };
        self.editing = Some(EditSession {
            id,
            draft: task.text.clone(),
        });
        true
    }

    /// Replaces the draft text of the active edit session, if any.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = draft.into();
        }
    }

    /// Commits the trimmed draft to the edited task and closes the session.
    ///
    /// A whitespace-only draft does not commit and leaves the session
    /// open, so the user keeps editing. `Ok(false)` also covers "no
    /// session active".
    pub fn save_edit(&mut self) -> StoreResult<bool> {
        let Some(session) = self.editing.as_ref() else {
            return Ok(false);
        };
        let trimmed = session.draft.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let id = session.id;
        let text = trimmed.to_string();
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            // Task vanished mid-edit; nothing to commit.
            self.editing = None;
            return Ok(false);
        };
        task.text = text;
        self.editing = None;
        self.persist()?;
        Ok(true)
    }

    /// Discards the active edit session without committing.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Id of the task currently being edited, if any.
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|session| session.id)
    }

    /// Draft text of the active edit session, if any.
    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|session| session.draft.as_str())
    }

    fn persist(&mut self) -> StoreResult<()> {
        if let Err(err) = self.store.save(&self.tasks) {
            // In-memory list stays authoritative for the session.
            warn!("event=store_save module=controller status=error error={err}");
            return Err(err);
        }
        Ok(())
    }
}
