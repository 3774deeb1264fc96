//! Core domain logic for Task Master.
//! This crate is the single source of truth for business invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use controller::task_list::{TaskCounts, TaskListController};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use store::{MemoryTaskStore, SqliteTaskStore, StoreError, StoreResult, TaskStore};
pub use view::projector::{visible_tasks, StatusFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
