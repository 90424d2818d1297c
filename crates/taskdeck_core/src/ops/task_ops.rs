//! Pure task operations.
//!
//! # Responsibility
//! - Validate raw user text before it reaches a task.
//! - Build, toggle and merge task values without touching shared state.
//! - Derive filtered and sorted views of a task list.
//!
//! # Invariants
//! - Functions never retain references past the call; inputs are borrowed or
//!   consumed and new values are returned.
//! - `create_task` and `apply_update` trust their caller to have validated.
//! - `sort_tasks` order: incomplete before completed, then `created_seq` DESC.

use crate::model::task::{
    check_description, check_title, normalize_description, Task, TaskFilter, TaskUpdate,
    TaskValidationError,
};
use chrono::NaiveDate;
use std::cmp::Reverse;
use uuid::Uuid;

/// Validates raw title and optional description for a new task.
///
/// # Errors
/// - `EmptyTitle` when `title` is blank after trimming.
/// - `TitleTooLong` when the trimmed title exceeds 100 chars.
/// - `DescriptionTooLong` when the trimmed description exceeds 500 chars.
pub fn validate_task(title: &str, description: Option<&str>) -> Result<(), TaskValidationError> {
    check_title(title)?;
    if let Some(description) = description {
        check_description(description)?;
    }
    Ok(())
}

/// Validates only the text fields an update actually supplies.
///
/// An update without a title never fails with `EmptyTitle`.
pub fn validate_update(update: &TaskUpdate) -> Result<(), TaskValidationError> {
    if let Some(title) = update.title.as_deref() {
        check_title(title)?;
    }
    if let Some(description) = update.description.as_deref() {
        check_description(description)?;
    }
    Ok(())
}

/// Builds a new incomplete task with a fresh ID and trimmed text.
///
/// `created_seq` must come from the owning store's sequence counter.
pub fn create_task(
    title: &str,
    description: Option<&str>,
    due: Option<NaiveDate>,
    created_seq: u64,
) -> Task {
    Task {
        id: Uuid::new_v4(),
        created_seq,
        title: title.trim().to_string(),
        description: normalize_description(description),
        due,
        completed: false,
    }
}

/// Returns a copy of `task` with `completed` flipped.
pub fn toggle_completion(task: &Task) -> Task {
    Task {
        completed: !task.completed,
        ..task.clone()
    }
}

/// Merges `update` into a copy of `task`.
///
/// Supplied text is trimmed; absent fields keep their current value.
pub fn apply_update(task: &Task, update: &TaskUpdate) -> Task {
    let mut next = task.clone();
    if let Some(title) = update.title.as_deref() {
        next.title = title.trim().to_string();
    }
    if let Some(description) = update.description.as_deref() {
        next.description = normalize_description(Some(description));
    }
    if let Some(due) = update.due {
        next.due = due;
    }
    if let Some(completed) = update.completed {
        next.completed = completed;
    }
    next
}

/// Returns the tasks visible under `filter`, preserving input order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Sorts tasks into display order.
///
/// Ties on identical keys keep their input order (stable sort). Keys are
/// unique for tasks created by one store.
pub fn sort_tasks(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by_key(|task| (task.completed, Reverse(task.created_seq)));
    tasks
}
