//! Status-partitioned task store port.

use crate::import::domain::{LocalTask, TaskId, TaskStatus};
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Flat-file task store keyed by identifier and partitioned by status.
///
/// Each [`TaskStatus`] owns one partition. A record lives in the partition
/// of its current status under a name derived from its identifier.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Returns where the record for `id` lives when it has `status`.
    fn location(&self, id: TaskId, status: TaskStatus) -> Utf8PathBuf;

    /// Reads the raw record for `id` from the `status` partition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no such record exists and
    /// [`TaskStoreError::Read`] for any other read failure.
    fn read(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<String>;

    /// Parses a raw record previously returned by [`TaskStore::read`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Decode`] when the content is not a valid
    /// task record.
    fn decode(&self, id: TaskId, status: TaskStatus, raw: &str) -> TaskStoreResult<LocalTask>;

    /// Deletes the record for `id` from the `status` partition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Remove`] when the record cannot be deleted.
    fn remove(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()>;

    /// Encodes `task` and writes it into the partition of its status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Encode`] or [`TaskStoreError::Write`] when
    /// the record cannot be persisted.
    fn write(&self, task: &LocalTask) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// No record exists at the path.
    #[error("task record not found: {path}")]
    NotFound {
        /// Expected record location.
        path: Utf8PathBuf,
    },

    /// The record exists but could not be read.
    #[error("failed to read task record {path}: {source}")]
    Read {
        /// Record location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The record content is not a valid task.
    #[error("failed to decode task record {path}: {reason}")]
    Decode {
        /// Record location.
        path: Utf8PathBuf,
        /// Parser failure description.
        reason: String,
    },

    /// The record could not be deleted.
    #[error("failed to remove task record {path}: {source}")]
    Remove {
        /// Record location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The task could not be encoded.
    #[error("failed to encode task {id}: {reason}")]
    Encode {
        /// Task identifier.
        id: TaskId,
        /// Encoder failure description.
        reason: String,
    },

    /// The encoded record could not be written.
    #[error("failed to write task record {path}: {source}")]
    Write {
        /// Record location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// Persistence-layer failure outside the record operations.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` when the error means the record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
