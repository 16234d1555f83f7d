//! Local task record and lifecycle status types.

use super::{ParseTaskStatusError, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// Each status maps to its own storage partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is being worked on.
    Active,
    /// Task has not been started.
    Pending,
    /// Task work is temporarily paused.
    Paused,
    /// Task has been completed.
    Resolved,
    /// Task has been handed to someone else.
    Delegated,
    /// Task is postponed to a later date.
    Deferred,
    /// Task may be done at some unspecified point.
    Someday,
    /// Task is a recurring task definition.
    Recurring,
    /// Task is a template for other tasks.
    Template,
}

impl TaskStatus {
    /// Every status, in partition scan order.
    pub const ALL: [Self; 9] = [
        Self::Active,
        Self::Pending,
        Self::Paused,
        Self::Resolved,
        Self::Delegated,
        Self::Deferred,
        Self::Someday,
        Self::Recurring,
        Self::Template,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Paused => "paused",
            Self::Resolved => "resolved",
            Self::Delegated => "delegated",
            Self::Deferred => "deferred",
            Self::Someday => "someday",
            Self::Recurring => "recurring",
            Self::Template => "template",
        }
    }

    /// Returns `true` when a user has started or paused work locally.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::Active | Self::Paused)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter object for constructing a [`LocalTask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTaskData {
    /// Stable task identifier.
    pub id: TaskId,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Resolution timestamp, if resolved.
    pub resolved: Option<DateTime<Utc>>,
    /// One-line summary.
    pub summary: String,
    /// Project name.
    pub project: String,
    /// Priority label.
    pub priority: String,
    /// Free-form notes.
    pub notes: String,
    /// Ordered tags. Duplicates are kept.
    pub tags: Vec<String>,
}

/// Local task record as held by a task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTask {
    id: TaskId,
    status: TaskStatus,
    created: DateTime<Utc>,
    resolved: Option<DateTime<Utc>>,
    summary: String,
    project: String,
    priority: String,
    notes: String,
    tags: Vec<String>,
}

/// Which local edits survived a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    /// Local notes replaced the upstream notes.
    pub notes_preserved: bool,
    /// Local in-progress status replaced the upstream `pending` status.
    pub status_preserved: bool,
}

impl LocalTask {
    /// Creates a task from its field values.
    #[must_use]
    pub fn from_data(data: LocalTaskData) -> Self {
        Self {
            id: data.id,
            status: data.status,
            created: data.created,
            resolved: data.resolved,
            summary: data.summary,
            project: data.project,
            priority: data.priority,
            notes: data.notes,
            tags: data.tags,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the resolution timestamp.
    #[must_use]
    pub const fn resolved(&self) -> Option<DateTime<Utc>> {
        self.resolved
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the project.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the priority.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the tags in order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Moves the task to another status.
    ///
    /// Stores use this to model a user changing the task locally.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces the notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Folds local edits from `existing` into this upstream candidate.
    ///
    /// Non-empty local notes always win. A local `active` or `paused` status
    /// wins over an upstream `pending`. Every other field keeps the
    /// candidate's value.
    pub fn merge_local_edits(&mut self, existing: &Self) -> MergeReport {
        let mut report = MergeReport::default();

        if !existing.notes.is_empty() {
            self.notes.clone_from(&existing.notes);
            report.notes_preserved = true;
        }

        if self.status == TaskStatus::Pending && existing.status.is_in_progress() {
            self.status = existing.status;
            report.status_preserved = true;
        }

        report
    }
}
