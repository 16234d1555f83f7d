//! In-memory task store for import tests.

use camino::Utf8PathBuf;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::document::TaskDocument;
use crate::import::{
    domain::{LocalTask, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Records are held in encoded form so that decoding follows the same path
/// as the filesystem store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    records: Arc<RwLock<HashMap<(TaskStatus, TaskId), String>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw record content, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn insert_raw(
        &self,
        id: TaskId,
        status: TaskStatus,
        raw: impl Into<String>,
    ) -> TaskStoreResult<()> {
        let mut records = self.records.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records.insert((status, id), raw.into());
        Ok(())
    }

    /// Returns every status partition holding a record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn statuses_of(&self, id: TaskId) -> TaskStoreResult<Vec<TaskStatus>> {
        let records = self.records.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(TaskStatus::ALL
            .into_iter()
            .filter(|status| records.contains_key(&(*status, id)))
            .collect())
    }
}

impl TaskStore for InMemoryTaskStore {
    fn location(&self, id: TaskId, status: TaskStatus) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("memory://{status}/{id}.yml"))
    }

    fn read(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<String> {
        let records = self.records.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records
            .get(&(status, id))
            .cloned()
            .ok_or_else(|| TaskStoreError::NotFound {
                path: self.location(id, status),
            })
    }

    fn decode(&self, id: TaskId, status: TaskStatus, raw: &str) -> TaskStoreResult<LocalTask> {
        TaskDocument::from_yaml(raw)
            .map(|document| document.into_task(id, status))
            .map_err(|reason| TaskStoreError::Decode {
                path: self.location(id, status),
                reason,
            })
    }

    fn remove(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let mut records = self.records.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records
            .remove(&(status, id))
            .map(|_| ())
            .ok_or_else(|| TaskStoreError::Remove {
                path: self.location(id, status),
                source: Arc::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
            })
    }

    fn write(&self, task: &LocalTask) -> TaskStoreResult<()> {
        let encoded = TaskDocument::from_task(task)
            .to_yaml()
            .map_err(|reason| TaskStoreError::Encode {
                id: task.id(),
                reason,
            })?;
        let mut records = self.records.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records.insert((task.status(), task.id()), encoded);
        Ok(())
    }
}
