//! Domain model for issue import.
//!
//! The import domain models identity derivation, the flat field view used by
//! templates, and the local task record with its merge rules. Storage and
//! template execution stay outside the domain boundary.

mod error;
mod fields;
mod ids;
mod issue;
mod scope;
mod task;
mod templates;

pub use error::{ImportDomainError, ParseTaskStatusError};
pub use fields::IssueFields;
pub use ids::{IssueNumber, TaskId};
pub use issue::ExternalIssue;
pub use scope::{IssueKey, IssueProvider, IssueScope};
pub use task::{LocalTask, LocalTaskData, MergeReport, TaskStatus};
pub use templates::{IssueTemplates, TemplateSlot};
