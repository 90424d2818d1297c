//! Stateless task operations.
//!
//! # Responsibility
//! - Hold validation and transformation rules shared by every task write path.
//! - Stay free of storage and session state so any caller can reuse them.

pub mod task_ops;
