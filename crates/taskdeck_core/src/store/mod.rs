//! In-memory task state.
//!
//! # Responsibility
//! - Own the canonical task collection and the active view filter.
//! - Route every mutation through `ops::task_ops` validation and ordering.
//!
//! # Invariants
//! - The stored collection is always in `sort_tasks` order.
//! - Rejected mutations leave the store unchanged.

pub mod task_store;
