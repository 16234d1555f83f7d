//! Flat-file task store rooted in a capability directory.
//!
//! Layout:
//!
//! ```text
//! <root>/
//!   ├── active/<uuid>.yml
//!   ├── pending/<uuid>.yml
//!   └── …one directory per status
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::document::TaskDocument;
use crate::import::{
    domain::{LocalTask, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

const RECORD_EXTENSION: &str = "yml";

/// Task store backed by one YAML file per task.
#[derive(Debug)]
pub struct FsTaskStore {
    root: Dir,
    root_path: Utf8PathBuf,
}

impl FsTaskStore {
    /// Opens the store at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> TaskStoreResult<Self> {
        let root_path = path.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(&root_path, ambient_authority())
            .map_err(TaskStoreError::persistence)?;
        let root = Dir::open_ambient_dir(&root_path, ambient_authority())
            .map_err(TaskStoreError::persistence)?;
        Ok(Self { root, root_path })
    }

    /// Lists the task identifiers stored in the `status` partition.
    ///
    /// A partition that was never written is empty. Files that are not named
    /// after a UUID are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the partition cannot be
    /// listed.
    pub fn ids_in(&self, status: TaskStatus) -> TaskStoreResult<Vec<TaskId>> {
        let entries = match self.root.read_dir(status.as_str()) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(TaskStoreError::persistence(err)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let name = entry
                .and_then(|dir_entry| dir_entry.file_name())
                .map_err(TaskStoreError::persistence)?;
            let Some(stem) = name
                .strip_suffix(RECORD_EXTENSION)
                .and_then(|rest| rest.strip_suffix('.'))
            else {
                continue;
            };
            if let Ok(uuid) = Uuid::parse_str(stem) {
                ids.push(TaskId::from_uuid(uuid));
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn relative_path(id: TaskId, status: TaskStatus) -> Utf8PathBuf {
        Utf8Path::new(status.as_str()).join(format!("{id}.{RECORD_EXTENSION}"))
    }

    fn temporary_path(id: TaskId, status: TaskStatus) -> Utf8PathBuf {
        Utf8Path::new(status.as_str()).join(format!(".{id}.{RECORD_EXTENSION}.tmp"))
    }

    fn write_error(&self, id: TaskId, status: TaskStatus, err: io::Error) -> TaskStoreError {
        TaskStoreError::Write {
            path: self.location(id, status),
            source: Arc::new(err),
        }
    }
}

impl TaskStore for FsTaskStore {
    fn location(&self, id: TaskId, status: TaskStatus) -> Utf8PathBuf {
        self.root_path.join(Self::relative_path(id, status))
    }

    fn read(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<String> {
        self.root
            .read_to_string(Self::relative_path(id, status))
            .map_err(|err| {
                let path = self.location(id, status);
                if err.kind() == io::ErrorKind::NotFound {
                    TaskStoreError::NotFound { path }
                } else {
                    TaskStoreError::Read {
                        path,
                        source: Arc::new(err),
                    }
                }
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
        self.root
            .remove_file(Self::relative_path(id, status))
            .map_err(|err| TaskStoreError::Remove {
                path: self.location(id, status),
                source: Arc::new(err),
            })
    }

    fn write(&self, task: &LocalTask) -> TaskStoreResult<()> {
        let id = task.id();
        let status = task.status();
        let encoded = TaskDocument::from_task(task)
            .to_yaml()
            .map_err(|reason| TaskStoreError::Encode { id, reason })?;

        self.root
            .create_dir_all(status.as_str())
            .map_err(|err| self.write_error(id, status, err))?;

        // Write beside the target and rename so readers never see a partial
        // record.
        let temporary = Self::temporary_path(id, status);
        self.root
            .write(&temporary, encoded)
            .map_err(|err| self.write_error(id, status, err))?;
        if let Err(err) =
            self.root
                .rename(&temporary, &self.root, Self::relative_path(id, status))
        {
            if let Err(cleanup) = self.root.remove_file(&temporary) {
                debug!(path = %temporary, error = %cleanup, "temporary record cleanup failed");
            }
            return Err(self.write_error(id, status, err));
        }
        Ok(())
    }
}
