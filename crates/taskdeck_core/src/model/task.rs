//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record owned by the task store.
//! - Define filter, stats and partial-update shapes consumed by task operations.
//! - Define the validation error taxonomy surfaced to the presentation layer.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_seq` orders tasks by creation; `id` never does.
//! - `title` is trimmed, non-empty and at most `MAX_TITLE_CHARS` chars.
//! - `description` is trimmed, at most `MAX_DESCRIPTION_CHARS` chars, and an
//!   empty description is stored as `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task.
///
/// Identity only. Ordering uses `Task::created_seq`.
pub type TaskId = Uuid;

/// Maximum title length in chars, measured after trimming.
pub const MAX_TITLE_CHARS: usize = 100;
/// Maximum description length in chars, measured after trimming.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Canonical to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Stable ID used by the UI to address this task.
    pub id: TaskId,
    /// Creation sequence assigned by the owning store. Strictly increasing.
    pub created_seq: u64,
    /// Trimmed display title.
    pub title: String,
    /// Trimmed optional body text.
    pub description: Option<String>,
    /// Calendar due date; `None` means no deadline.
    pub due: Option<NaiveDate>,
    pub completed: bool,
}

/// Unvalidated wire shape used as the deserialization source for `Task`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    created_seq: u64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due: Option<NaiveDate>,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        check_title(record.title.as_str())?;
        if let Some(description) = record.description.as_deref() {
            check_description(description)?;
        }
        Ok(Self {
            id: record.id,
            created_seq: record.created_seq,
            title: record.title.trim().to_string(),
            description: normalize_description(record.description.as_deref()),
            due: record.due,
            completed: record.completed,
        })
    }
}

/// Completion-based view filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task, in stored order.
    #[default]
    All,
    /// Only tasks with `completed == true`.
    Completed,
    /// Only tasks with `completed == false`.
    Pending,
}

/// Stable string id for `TaskFilter::All`.
pub const TASK_FILTER_ALL: &str = "all";
/// Stable string id for `TaskFilter::Completed`.
pub const TASK_FILTER_COMPLETED: &str = "completed";
/// Stable string id for `TaskFilter::Pending`.
pub const TASK_FILTER_PENDING: &str = "pending";

impl TaskFilter {
    /// Stable string id shared with the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => TASK_FILTER_ALL,
            Self::Completed => TASK_FILTER_COMPLETED,
            Self::Pending => TASK_FILTER_PENDING,
        }
    }

    /// Returns whether `task` is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

/// Parses one filter from its stable string id.
///
/// Surrounding whitespace is ignored; matching is case-sensitive.
pub fn parse_task_filter(value: &str) -> Result<TaskFilter, TaskFilterParseError> {
    match value.trim() {
        "" => Err(TaskFilterParseError::Empty),
        TASK_FILTER_ALL => Ok(TaskFilter::All),
        TASK_FILTER_COMPLETED => Ok(TaskFilter::Completed),
        TASK_FILTER_PENDING => Ok(TaskFilter::Pending),
        other => Err(TaskFilterParseError::Unsupported(other.to_string())),
    }
}

/// Filter parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilterParseError {
    Empty,
    Unsupported(String),
}

impl Display for TaskFilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task filter must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "task filter is unsupported: {value}; expected all|completed|pending"
            ),
        }
    }
}

impl Error for TaskFilterParseError {}

/// Counts derived from the full collection, independent of the active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    /// Computes stats over `tasks`.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }
}

/// Partial update for one task.
///
/// Each field is either `None` (keep the current value) or `Some(value)`
/// (replace it). Identity and creation sequence cannot be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Raw title; trimmed when applied.
    pub title: Option<String>,
    /// Raw description; trimmed when applied, blank clears it.
    pub description: Option<String>,
    /// `Some(None)` clears the due date.
    pub due: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due(mut self, due: Option<NaiveDate>) -> Self {
        self.due = Some(due);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns whether this update carries user text that needs validation.
    pub fn touches_text(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }

    /// Returns whether this update changes nothing.
    pub fn is_empty(&self) -> bool {
        !self.touches_text() && self.due.is_none() && self.completed.is_none()
    }
}

/// Validation errors for user-supplied task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// Trimmed title exceeds `max` chars.
    TitleTooLong { len: usize, max: usize },
    /// Trimmed description exceeds `max` chars.
    DescriptionTooLong { len: usize, max: usize },
}

impl TaskValidationError {
    /// Stable machine-readable code, safe to log.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::TitleTooLong { .. } => "title_too_long",
            Self::DescriptionTooLong { .. } => "description_too_long",
        }
    }
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title is required"),
            Self::TitleTooLong { len, max } => write!(
                f,
                "Task title must be at most {max} characters (got {len})"
            ),
            Self::DescriptionTooLong { len, max } => write!(
                f,
                "Task description must be at most {max} characters (got {len})"
            ),
        }
    }
}

impl Error for TaskValidationError {}

pub(crate) fn check_title(title: &str) -> Result<(), TaskValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    let len = trimmed.chars().count();
    if len > MAX_TITLE_CHARS {
        return Err(TaskValidationError::TitleTooLong {
            len,
            max: MAX_TITLE_CHARS,
        });
    }
    Ok(())
}

pub(crate) fn check_description(description: &str) -> Result<(), TaskValidationError> {
    let len = description.trim().chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(TaskValidationError::DescriptionTooLong {
            len,
            max: MAX_DESCRIPTION_CHARS,
        });
    }
    Ok(())
}

/// Trims a raw description, mapping blank input to `None`.
pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{normalize_description, parse_task_filter, TaskFilter, TaskFilterParseError};

    #[test]
    fn parses_all_supported_filters() {
        assert_eq!(parse_task_filter("all").expect("all parse"), TaskFilter::All);
        assert_eq!(
            parse_task_filter(" completed ").expect("completed parse"),
            TaskFilter::Completed
        );
        assert_eq!(
            parse_task_filter("pending").expect("pending parse"),
            TaskFilter::Pending
        );
    }

    #[test]
    fn filter_parse_rejects_empty_and_unknown_values() {
        assert_eq!(parse_task_filter("  "), Err(TaskFilterParseError::Empty));
        assert_eq!(
            parse_task_filter("done"),
            Err(TaskFilterParseError::Unsupported("done".to_string()))
        );
    }

    #[test]
    fn filter_as_str_matches_parse() {
        for filter in [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending] {
            assert_eq!(parse_task_filter(filter.as_str()), Ok(filter));
        }
    }

    #[test]
    fn blank_description_normalizes_to_none() {
        assert_eq!(normalize_description(Some("   ")), None);
        assert_eq!(normalize_description(None), None);
        assert_eq!(
            normalize_description(Some("  body ")).as_deref(),
            Some("body")
        );
    }
}
