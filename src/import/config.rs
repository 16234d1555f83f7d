//! Import configuration loaded from YAML.
//!
//! ```yaml
//! templates:
//!   summary: "{{ title }}"
//!   project: "{{ repo_name }}"
//!   priority: P2
//!   notes: "{{ url }}"
//!   tags: ["{{ milestone }}", "gh"]
//! read_policy: lax
//! ```
//!
//! Every key is optional and falls back to [`ImportConfig::default`].

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::import::{domain::IssueTemplates, services::ReadPolicy};

/// Settings for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Field-mapping templates.
    pub templates: IssueTemplates,
    /// How read failures other than a missing record are handled.
    pub read_policy: ReadPolicy,
}

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The configuration content is not valid.
    #[error("invalid config: {0}")]
    Parse(String),
}

impl ImportConfig {
    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid YAML or
    /// contains unknown values.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|error| ConfigError::Parse(error.to_string()))
    }

    /// Reads and parses the configuration file `file` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(dir: &Dir, file: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        let path = file.as_ref();
        let raw = dir.read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            source: Arc::new(err),
        })?;
        Self::from_yaml_str(&raw)
    }
}
