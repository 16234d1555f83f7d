//! Application services for issue import.

mod builder;
mod import;
mod reconcile;

pub use builder::build_task;
pub use import::{ImportError, ImportResult, IssueImportService};
pub use reconcile::{ImportOutcome, ReadPolicy, ReconcileError, Reconciler};
