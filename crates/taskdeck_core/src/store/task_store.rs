//! Session-scoped task store.
//!
//! # Responsibility
//! - Hold the canonical task list and active filter for one UI session.
//! - Expose add/toggle/delete/update/clear mutations and derived reads.
//!
//! # Invariants
//! - Each mutation computes the next collection first and commits it with a
//!   single assignment; callers never observe a partial state.
//! - Unknown task IDs are no-ops, not errors.
//! - `created_seq` values handed out by one store are strictly increasing.

use crate::model::task::{Task, TaskFilter, TaskId, TaskStats, TaskUpdate, TaskValidationError};
use crate::ops::task_ops::{
    apply_update, create_task, filter_tasks, sort_tasks, toggle_completion, validate_task,
    validate_update,
};
use chrono::NaiveDate;
use log::{debug, warn};

pub type StoreResult<T> = Result<T, TaskValidationError>;

/// Canonical task collection for one session.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: TaskFilter,
    next_seq: u64,
}

impl TaskStore {
    /// Creates an empty store with the `All` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates input, creates a task and commits the re-sorted collection.
    ///
    /// # Errors
    /// - Returns the validation error and leaves the store unchanged when the
    ///   title or description is invalid.
    pub fn add_task(
        &mut self,
        title: &str,
        description: Option<&str>,
        due: Option<NaiveDate>,
    ) -> StoreResult<TaskId> {
        if let Err(err) = validate_task(title, description) {
            warn!(
                "event=task_add module=store status=rejected reason={}",
                err.code()
            );
            return Err(err);
        }

        let task = create_task(title, description, due, self.next_seq);
        let task_id = task.id;
        let mut next = self.tasks.clone();
        next.push(task);

        self.tasks = sort_tasks(next);
        self.next_seq += 1;
        debug!(
            "event=task_add module=store status=ok task_id={} total={}",
            task_id,
            self.tasks.len()
        );
        Ok(task_id)
    }

    /// Flips completion of the task with `id`.
    ///
    /// Returns `false` and leaves the store unchanged when `id` is unknown.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_toggle module=store status=noop task_id={id}");
            return false;
        };

        let mut next = self.tasks.clone();
        next[index] = toggle_completion(&next[index]);
        self.tasks = sort_tasks(next);
        debug!("event=task_toggle module=store status=ok task_id={id}");
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` when `id` is unknown. Removal keeps relative order, so
    /// no re-sort is needed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        debug!(
            "event=task_delete module=store status={} task_id={id}",
            if removed { "ok" } else { "noop" }
        );
        removed
    }

    /// Merges `update` into the task with `id` and re-sorts.
    ///
    /// Validation runs before the lookup, so an invalid update is rejected
    /// even for an unknown `id`. Returns `Ok(false)` when `id` is unknown.
    ///
    /// # Errors
    /// - Returns the validation error and leaves the store unchanged when a
    ///   supplied title or description is invalid.
    pub fn update_task(&mut self, id: TaskId, update: &TaskUpdate) -> StoreResult<bool> {
        if let Err(err) = validate_update(update) {
            warn!(
                "event=task_update module=store status=rejected task_id={id} reason={}",
                err.code()
            );
            return Err(err);
        }

        let Some(index) = self.position(id) else {
            debug!("event=task_update module=store status=noop task_id={id}");
            return Ok(false);
        };

        let mut next = self.tasks.clone();
        next[index] = apply_update(&next[index], update);
        self.tasks = sort_tasks(next);
        debug!("event=task_update module=store status=ok task_id={id}");
        Ok(true)
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        debug!("event=task_clear_completed module=store status=ok removed={removed}");
        removed
    }

    /// Sets the filter applied by `visible_tasks`.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        debug!(
            "event=filter_set module=store status=ok filter={}",
            filter.as_str()
        );
    }

    /// Returns the active filter.
    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns tasks matching the active filter, in stored order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, self.filter)
    }

    /// Returns the full sorted collection, ignoring the filter.
    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns one task by ID.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns counts over the full collection, ignoring the filter.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}
