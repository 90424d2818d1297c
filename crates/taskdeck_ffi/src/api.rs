//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one task session per UI session to Dart via FRB.
//! - Translate raw UI input (strings) into core types and back.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Mutations on one session are serialized; the last writer wins.
//! - Unknown or unparsable task IDs are no-ops, never failures.

use chrono::NaiveDate;
use log::warn;
use std::sync::{Mutex, PoisonError};
use taskdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_task_filter, ping as ping_inner, Task, TaskId, TaskStats, TaskStore, TaskUpdate,
};
use uuid::Uuid;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task projection rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    pub due: Option<String>,
    pub completed: bool,
}

/// Counts shown in the stats header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatsView {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
}

/// Partial edit submitted by the edit screen.
///
/// `None` fields are left unchanged. `clear_due` wins over `due`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// New due date as `YYYY-MM-DD`.
    pub due: Option<String>,
    pub clear_due: bool,
    pub completed: Option<bool>,
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the mutation was accepted.
    pub ok: bool,
    /// Affected task ID, when one was created or found.
    pub task_id: Option<String>,
    /// Human-readable message for the UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            task_id: task_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// One UI session's task state.
///
/// Created when the list screen mounts and dropped when it goes away.
#[flutter_rust_bridge::frb(opaque)]
pub struct TaskSession {
    store: Mutex<TaskStore>,
}

impl Default for TaskSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSession {
    /// Creates an empty session with the `all` filter.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(TaskStore::new()),
        }
    }

    /// Adds a task from raw modal input.
    ///
    /// # FFI contract
    /// - Async call so the UI can show progress.
    /// - Blank `description`/`due` mean "not set".
    /// - Fails with a readable message on invalid text or an unparsable date.
    pub fn add_task(
        &self,
        title: String,
        description: Option<String>,
        due: Option<String>,
    ) -> TaskActionResponse {
        let due = match parse_due(due.as_deref()) {
            Ok(due) => due,
            Err(message) => return TaskActionResponse::failure(message),
        };
        match self.with_store(|store| store.add_task(&title, description.as_deref(), due)) {
            Ok(task_id) => TaskActionResponse::success("Task created.", Some(task_id)),
            Err(err) => TaskActionResponse::failure(err.to_string()),
        }
    }

    /// Flips completion of one task; unknown IDs are a successful no-op.
    pub fn toggle_task(&self, task_id: String) -> TaskActionResponse {
        let Some(id) = parse_task_id(&task_id) else {
            return TaskActionResponse::success("No matching task.", None);
        };
        if self.with_store(|store| store.toggle_task(id)) {
            TaskActionResponse::success("Task updated.", Some(id))
        } else {
            TaskActionResponse::success("No matching task.", None)
        }
    }

    /// Deletes one task; unknown IDs are a successful no-op.
    pub fn delete_task(&self, task_id: String) -> TaskActionResponse {
        let Some(id) = parse_task_id(&task_id) else {
            return TaskActionResponse::success("No matching task.", None);
        };
        if self.with_store(|store| store.delete_task(id)) {
            TaskActionResponse::success("Task deleted.", Some(id))
        } else {
            TaskActionResponse::success("No matching task.", None)
        }
    }

    /// Applies a partial edit to one task.
    ///
    /// Invalid text fails even when the ID is unknown.
    pub fn update_task(&self, task_id: String, request: TaskUpdateRequest) -> TaskActionResponse {
        let update = match to_task_update(request) {
            Ok(update) => update,
            Err(message) => return TaskActionResponse::failure(message),
        };
        let id = parse_task_id(&task_id).unwrap_or_else(Uuid::nil);
        match self.with_store(|store| store.update_task(id, &update)) {
            Ok(true) => TaskActionResponse::success("Task updated.", Some(id)),
            Ok(false) => TaskActionResponse::success("No matching task.", None),
            Err(err) => TaskActionResponse::failure(err.to_string()),
        }
    }

    /// Removes every completed task.
    pub fn clear_completed(&self) -> TaskActionResponse {
        let removed = self.with_store(|store| store.clear_completed());
        TaskActionResponse::success(format!("Cleared {removed} completed task(s)."), None)
    }

    /// Sets the active filter (`all|completed|pending`).
    ///
    /// Returns an empty string on success and an error message otherwise.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_filter(&self, filter: String) -> String {
        match parse_task_filter(&filter) {
            Ok(filter) => {
                self.with_store(|store| store.set_filter(filter));
                String::new()
            }
            Err(err) => err.to_string(),
        }
    }

    /// Returns the active filter id.
    #[flutter_rust_bridge::frb(sync)]
    pub fn filter(&self) -> String {
        self.with_store(|store| store.filter().as_str().to_string())
    }

    /// Returns tasks visible under the active filter, in display order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn visible_tasks(&self) -> Vec<TaskItem> {
        self.with_store(|store| store.visible_tasks().into_iter().map(to_task_item).collect())
    }

    /// Returns every task, in display order, ignoring the filter.
    #[flutter_rust_bridge::frb(sync)]
    pub fn all_tasks(&self) -> Vec<TaskItem> {
        self.with_store(|store| store.all_tasks().iter().map(to_task_item).collect())
    }

    /// Returns counts over all tasks.
    #[flutter_rust_bridge::frb(sync)]
    pub fn stats(&self) -> TaskStatsView {
        self.with_store(|store| to_stats_view(store.stats()))
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut TaskStore) -> T) -> T {
        // A panic mid-mutation cannot leave a partial collection behind, so a
        // poisoned lock still guards consistent state.
        let mut guard = self.store.lock().unwrap_or_else(|poisoned| {
            warn!("event=session_lock module=ffi status=recovered_poison");
            PoisonError::into_inner(poisoned)
        });
        f(&mut guard)
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn parse_due(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DUE_DATE_FORMAT)
            .map(Some)
            .map_err(|err| format!("invalid due date `{value}`: {err}; expected YYYY-MM-DD")),
    }
}

fn to_task_update(request: TaskUpdateRequest) -> Result<TaskUpdate, String> {
    let due = if request.clear_due {
        Some(None)
    } else {
        parse_due(request.due.as_deref())?.map(Some)
    };
    Ok(TaskUpdate {
        title: request.title,
        description: request.description,
        due,
        completed: request.completed,
    })
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        due: task
            .due
            .map(|date| date.format(DUE_DATE_FORMAT).to_string()),
        completed: task.completed,
    }
}

fn to_stats_view(stats: TaskStats) -> TaskStatsView {
    let clamp = |value: usize| u32::try_from(value).unwrap_or(u32::MAX);
    TaskStatsView {
        total: clamp(stats.total),
        completed: clamp(stats.completed),
        pending: clamp(stats.pending),
    }
}
