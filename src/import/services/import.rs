//! Service layer composing task building and reconciliation.

use std::sync::Arc;
use thiserror::Error;

use super::{
    builder::build_task,
    reconcile::{ImportOutcome, ReadPolicy, ReconcileError, Reconciler},
};
use crate::import::{
    adapters::MiniJinjaRenderer,
    config::ImportConfig,
    domain::{ExternalIssue, IssueScope, LocalTask},
    ports::{TaskStore, TemplateError, TemplateRenderer},
};

/// Service-level errors for issue import.
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    /// A field template failed; the issue was not imported.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// The store rejected the import.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// Result type for issue import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Issue import orchestration service.
pub struct IssueImportService<S, R>
where
    S: TaskStore,
    R: TemplateRenderer,
{
    renderer: Arc<R>,
    reconciler: Reconciler<S>,
}

impl<S> IssueImportService<S, MiniJinjaRenderer>
where
    S: TaskStore,
{
    /// Creates a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Template`] when a configured template does not
    /// compile.
    pub fn from_config(store: Arc<S>, config: ImportConfig) -> ImportResult<Self> {
        let renderer = MiniJinjaRenderer::new(config.templates)?;
        Ok(Self::new(store, Arc::new(renderer)).with_read_policy(config.read_policy))
    }
}

impl<S, R> IssueImportService<S, R>
where
    S: TaskStore,
    R: TemplateRenderer,
{
    /// Creates a new issue import service.
    #[must_use]
    pub const fn new(store: Arc<S>, renderer: Arc<R>) -> Self {
        Self {
            renderer,
            reconciler: Reconciler::new(store),
        }
    }

    /// Sets how the reconciler treats read failures.
    #[must_use]
    pub fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.reconciler = self.reconciler.with_read_policy(read_policy);
        self
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        self.reconciler.store()
    }

    /// Builds the candidate task for an issue without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Template`] when any template fails.
    pub fn build_task(&self, scope: &IssueScope, issue: &ExternalIssue) -> ImportResult<LocalTask> {
        Ok(build_task(&*self.renderer, scope, issue)?)
    }

    /// Places an already built candidate into the store.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Reconcile`] when the store rejects the import.
    pub fn import_task(&self, candidate: LocalTask) -> ImportResult<ImportOutcome> {
        Ok(self.reconciler.import(candidate)?)
    }

    /// Builds the candidate for `issue` and places it into the store.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] when building or reconciliation fails.
    pub fn import_issue(
        &self,
        scope: &IssueScope,
        issue: &ExternalIssue,
    ) -> ImportResult<ImportOutcome> {
        let candidate = self.build_task(scope, issue)?;
        self.import_task(candidate)
    }
}
