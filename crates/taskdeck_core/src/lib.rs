//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod ops;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::task::{
    parse_task_filter, Task, TaskFilter, TaskFilterParseError, TaskId, TaskStats, TaskUpdate,
    TaskValidationError, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS,
};
pub use ops::task_ops::{
    apply_update, create_task, filter_tasks, sort_tasks, toggle_completion, validate_task,
    validate_update,
};
pub use store::task_store::{StoreResult, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
