//! Read-side projections over the task list.
//!
//! # Responsibility
//! - Derive the visible subset/ordering from the full list plus view
//!   inputs (status filter, search term).
//!
//! # Invariants
//! - Projections are pure and stateless; they never mutate the list and
//!   are recomputed on every call, never cached.

pub mod projector;
