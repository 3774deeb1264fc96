//! Controller layer owning the task list.
//!
//! # Responsibility
//! - Orchestrate mutators over the single owned list.
//! - Write every committed change through the persistence port.
//!
//! # Invariants
//! - All mutation goes through `&mut self`; there is no concurrent writer.
//! - The persisted blob reflects the last committed in-memory state.

pub mod task_list;
