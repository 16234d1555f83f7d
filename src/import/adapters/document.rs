//! YAML document model shared by the task store adapters.
//!
//! The identifier and status are not part of the document: they are implied
//! by the record's file name and partition, matching the dstask layout.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::import::domain::{LocalTask, LocalTaskData, TaskId, TaskStatus};

/// On-disk form of a task record.
///
/// Every field is optional when reading, as in other dstask clients: an
/// empty or truncated record decodes to a zero-valued task that the next
/// import merges and replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDocument {
    /// One-line summary.
    pub summary: String,
    /// Free-form notes.
    pub notes: String,
    /// Ordered tags.
    pub tags: Vec<String>,
    /// Project name.
    pub project: String,
    /// Priority label.
    pub priority: String,
    /// Creation timestamp. Missing values read as the Unix epoch.
    pub created: DateTime<Utc>,
    /// Resolution timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<DateTime<Utc>>,
}

impl TaskDocument {
    /// Captures the persisted fields of `task`.
    #[must_use]
    pub fn from_task(task: &LocalTask) -> Self {
        Self {
            summary: task.summary().to_owned(),
            notes: task.notes().to_owned(),
            tags: task.tags().to_vec(),
            project: task.project().to_owned(),
            priority: task.priority().to_owned(),
            created: task.created(),
            resolved: task.resolved(),
        }
    }

    /// Rebuilds the task stored under `id` in the `status` partition.
    ///
    /// A year-one resolution time is the zero value other dstask clients
    /// write for unresolved tasks and is read back as unset.
    #[must_use]
    pub fn into_task(self, id: TaskId, status: TaskStatus) -> LocalTask {
        LocalTask::from_data(LocalTaskData {
            id,
            status,
            created: self.created,
            resolved: self.resolved.filter(|resolved| resolved.year() > 1),
            summary: self.summary,
            project: self.project,
            priority: self.priority,
            notes: self.notes,
            tags: self.tags,
        })
    }

    /// Encodes the document as YAML.
    ///
    /// # Errors
    ///
    /// Returns the serializer error message on failure.
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|error| error.to_string())
    }

    /// Decodes a YAML document.
    ///
    /// # Errors
    ///
    /// Returns the parser error message on failure. Blank input is an empty
    /// document, not an error.
    pub fn from_yaml(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|error| error.to_string())
    }
}
