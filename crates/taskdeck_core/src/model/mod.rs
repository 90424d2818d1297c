//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical task record and the shapes derived from it.
//! - Own the validation rules every write path must respect.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Removal is a hard delete; nothing is kept after a task leaves the store.

pub mod task;
