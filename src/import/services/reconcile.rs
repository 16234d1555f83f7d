//! Merge-on-import reconciliation against a status-partitioned store.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::import::{
    domain::{LocalTask, MergeReport, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};

/// How the partition scan treats read failures.
///
/// A missing record is always treated as absent. The policy only decides
/// what happens to other read failures, such as permission errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadPolicy {
    /// Any read failure means "not in this partition".
    #[default]
    Lax,
    /// Only a missing record means "not in this partition"; other read
    /// failures abort the import.
    Strict,
}

/// Result of placing one candidate into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// No earlier copy existed; the candidate was written as is.
    Created {
        /// Task identifier.
        id: TaskId,
        /// Status partition written to.
        status: TaskStatus,
    },
    /// An earlier copy was merged into the candidate and replaced.
    Merged {
        /// Task identifier.
        id: TaskId,
        /// Status partition written to.
        status: TaskStatus,
        /// Status partition the earlier copy was removed from.
        previous_status: TaskStatus,
        /// Which local edits survived.
        merge: MergeReport,
    },
}

impl ImportOutcome {
    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        match self {
            Self::Created { id, .. } | Self::Merged { id, .. } => *id,
        }
    }

    /// Returns the status partition the task was written to.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        match self {
            Self::Created { status, .. } | Self::Merged { status, .. } => *status,
        }
    }
}

/// Errors returned while reconciling a candidate with the store.
#[derive(Debug, Clone, Error)]
pub enum ReconcileError {
    /// An existing record could not be read or decoded.
    #[error("failed to load existing task {id} from '{status}' partition: {source}")]
    Lookup {
        /// Task identifier.
        id: TaskId,
        /// Partition being scanned.
        status: TaskStatus,
        /// Store failure.
        source: TaskStoreError,
    },

    /// The stale copy could not be removed; nothing was written.
    #[error("failed to remove stale task {id} from '{status}' partition: {source}")]
    RemoveStale {
        /// Task identifier.
        id: TaskId,
        /// Partition holding the stale copy.
        status: TaskStatus,
        /// Store failure.
        source: TaskStoreError,
    },

    /// The merged record could not be persisted.
    #[error("failed to persist task {id}: {source}")]
    Persist {
        /// Task identifier.
        id: TaskId,
        /// Store failure.
        source: TaskStoreError,
    },
}

/// Places candidate tasks into a store, keeping local edits.
#[derive(Debug)]
pub struct Reconciler<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    read_policy: ReadPolicy,
}

impl<S> Clone for Reconciler<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            read_policy: self.read_policy,
        }
    }
}

impl<S> Reconciler<S>
where
    S: TaskStore,
{
    /// Creates a reconciler with the lax read policy.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            store,
            read_policy: ReadPolicy::Lax,
        }
    }

    /// Sets the read policy.
    #[must_use]
    pub const fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.read_policy = read_policy;
        self
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Writes `candidate` into the store, merging any earlier copy.
    ///
    /// Every status partition is scanned in [`TaskStatus::ALL`] order. The
    /// first copy found is decoded, removed, and merged into the candidate
    /// with [`LocalTask::merge_local_edits`]. The result is written into the
    /// partition of its final status.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Lookup`] when a found record cannot be
    /// decoded (or, under [`ReadPolicy::Strict`], read),
    /// [`ReconcileError::RemoveStale`] when the earlier copy cannot be
    /// deleted, and [`ReconcileError::Persist`] when the write fails.
    pub fn import(&self, mut candidate: LocalTask) -> Result<ImportOutcome, ReconcileError> {
        let id = candidate.id();
        let existing = self.take_existing(id)?;

        let outcome = match existing {
            Some(existing) => {
                let merge = candidate.merge_local_edits(&existing);
                ImportOutcome::Merged {
                    id,
                    status: candidate.status(),
                    previous_status: existing.status(),
                    merge,
                }
            }
            None => ImportOutcome::Created {
                id,
                status: candidate.status(),
            },
        };

        self.store
            .write(&candidate)
            .map_err(|source| ReconcileError::Persist { id, source })?;

        match outcome {
            ImportOutcome::Created { status, .. } => {
                info!(task_id = %id, %status, "imported new task");
            }
            ImportOutcome::Merged {
                status,
                previous_status,
                merge,
                ..
            } => {
                info!(
                    task_id = %id,
                    %status,
                    %previous_status,
                    notes_preserved = merge.notes_preserved,
                    status_preserved = merge.status_preserved,
                    "merged task with local copy"
                );
            }
        }
        Ok(outcome)
    }

    /// Finds, decodes, and removes the first stored copy of `id`.
    fn take_existing(&self, id: TaskId) -> Result<Option<LocalTask>, ReconcileError> {
        for status in TaskStatus::ALL {
            let raw = match self.store.read(id, status) {
                Ok(raw) => raw,
                Err(source) => {
                    self.absorb_read_error(id, status, source)?;
                    continue;
                }
            };

            let existing = self
                .store
                .decode(id, status, &raw)
                .map_err(|source| ReconcileError::Lookup { id, status, source })?;
            self.store
                .remove(id, status)
                .map_err(|source| ReconcileError::RemoveStale { id, status, source })?;
            debug!(task_id = %id, %status, "removed stale local copy");
            return Ok(Some(existing));
        }
        Ok(None)
    }

    fn absorb_read_error(
        &self,
        id: TaskId,
        status: TaskStatus,
        source: TaskStoreError,
    ) -> Result<(), ReconcileError> {
        if source.is_not_found() {
            debug!(task_id = %id, %status, "no local copy in partition");
            return Ok(());
        }
        match self.read_policy {
            ReadPolicy::Lax => {
                warn!(task_id = %id, %status, error = %source, "treating unreadable record as absent");
                Ok(())
            }
            ReadPolicy::Strict => Err(ReconcileError::Lookup { id, status, source }),
        }
    }
}
