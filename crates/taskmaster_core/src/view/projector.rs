//! Visible-list projection: status filter, search match, priority sort.
//!
//! # Responsibility
//! - Compute the ordered visible sequence for rendering.
//!
//! # Invariants
//! - Output is always a subset of the input.
//! - Sort is stable: equal priorities keep their relative order, which is
//!   the original insertion order since neither filter reorders.

use crate::model::task::Task;

/// Completion-state filter selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task regardless of state.
    #[default]
    All,
    /// Only tasks with `completed = false`.
    Active,
    /// Only tasks with `completed = true`.
    Completed,
}

impl StatusFilter {
    fn keeps(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Derives the visible task sequence for the current view inputs.
///
/// Steps, in order: status filter, case-insensitive substring match of
/// `search` against task text (empty term matches everything), stable
/// sort by priority rank with high first. No pagination, no limit.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    filter: StatusFilter,
    search: &str,
) -> Vec<&'a Task> {
    let needle = search.to_lowercase();

    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|task| filter.keeps(task))
        .filter(|task| needle.is_empty() || task.text.to_lowercase().contains(&needle))
        .collect();

    visible.sort_by_key(|task| task.priority.rank());
    visible
}
