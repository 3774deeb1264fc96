//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, unique within the list.
//! - The full task list is the single source of truth; projections never
//!   own state.

pub mod task;
