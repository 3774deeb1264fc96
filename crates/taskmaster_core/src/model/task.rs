//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the controller.
//! - Provide creation helpers that establish entity defaults.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is immutable after creation.
//! - `text` is expected to be non-empty after trimming; the controller
//!   enforces this on every write path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency level attached to every task.
///
/// Serialized lowercase to match the persisted blob layout
/// (`"low" | "medium" | "high"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank used by the visible-list projection: high sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// One user-entered to-do item.
///
/// Field names on the wire follow the persisted layout: every field is
/// serialized as-is except `created_at`, which maps to `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique ID used only for lookup and equality.
    pub id: TaskId,
    /// User-supplied text; mutable via the edit flow.
    pub text: String,
    /// Completion flag, flipped by user action.
    pub completed: bool,
    /// Urgency level, mutable after creation.
    pub priority: Priority,
    /// Creation instant in epoch milliseconds; also the implicit secondary
    /// sort key because insertion order is never shuffled.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates a new pending task with a generated stable ID.
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self::with_id(Uuid::new_v4(), text, priority, now_epoch_ms())
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by tests and load paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        priority: Priority,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority,
            created_at,
        }
    }
}

/// Returns the current wall clock as epoch milliseconds.
///
/// Clamped to zero for clocks before the Unix epoch.
pub fn now_epoch_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
