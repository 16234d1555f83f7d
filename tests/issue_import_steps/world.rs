//! Shared world state for issue import BDD scenarios.

use std::sync::Arc;

use camino::Utf8PathBuf;
use chrono::{DateTime, TimeZone, Utc};
use issue_import::import::{
    adapters::{FsTaskStore, MiniJinjaRenderer},
    config::ImportConfig,
    domain::{ExternalIssue, IssueKey, IssueScope, TaskId, TaskStatus},
    services::{ImportOutcome, ImportResult, IssueImportService},
};
use rstest::fixture;
use tempfile::TempDir;

/// Service type used by the BDD world.
pub type TestImportService = IssueImportService<FsTaskStore, MiniJinjaRenderer>;

/// Templates used by every scenario.
const SCENARIO_CONFIG: &str = "templates:\n  notes: \"{{ url }}\"\n";

/// Scenario world for issue import behaviour tests.
pub struct ImportWorld {
    _temp: TempDir,
    pub root: Utf8PathBuf,
    pub store: Arc<FsTaskStore>,
    pub service: TestImportService,
    pub scope: Option<IssueScope>,
    pub issue: Option<ExternalIssue>,
    pub last_import_result: Option<ImportResult<ImportOutcome>>,
}

impl ImportWorld {
    /// Creates a world backed by a fresh temporary store.
    ///
    /// # Panics
    ///
    /// Panics when the temporary store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temporary directory");
        let root = Utf8PathBuf::from_path_buf(temp.path().join("tasks"))
            .expect("temporary path is UTF-8");
        let store = Arc::new(FsTaskStore::open(&root).expect("open task store"));
        let config = ImportConfig::from_yaml_str(SCENARIO_CONFIG).expect("scenario config parses");
        let service = IssueImportService::from_config(Arc::clone(&store), config)
            .expect("scenario templates compile");
        Self {
            _temp: temp,
            root,
            store,
            service,
            scope: None,
            issue: None,
            last_import_result: None,
        }
    }

    /// Returns the identifier derived for the pending issue.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        let scope = self
            .scope
            .clone()
            .ok_or_else(|| eyre::eyre!("missing scope in scenario world"))?;
        let issue = self
            .issue
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing issue in scenario world"))?;
        Ok(IssueKey::new(scope, issue.number()).task_id())
    }

    /// Returns every partition that holds the scenario task.
    pub fn partitions_holding_task(&self) -> Result<Vec<TaskStatus>, eyre::Report> {
        let id = self.task_id()?;
        let mut holding = Vec::new();
        for status in TaskStatus::ALL {
            if self.store.ids_in(status)?.contains(&id) {
                holding.push(status);
            }
        }
        Ok(holding)
    }
}

impl Default for ImportWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ImportWorld {
    ImportWorld::default()
}

/// Creation time of scenario issues.
pub fn issue_created_at() -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario timestamp"))
}
