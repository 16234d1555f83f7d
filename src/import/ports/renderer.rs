//! Template rendering port used to project issue fields onto a task.

use crate::import::domain::{IssueFields, TemplateSlot};
use thiserror::Error;

/// Renders one configured template slot against an issue view.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer {
    /// Renders the template for `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the slot has no template or the
    /// template fails to evaluate.
    fn render(&self, slot: TemplateSlot, fields: &IssueFields) -> Result<String, TemplateError>;

    /// Returns how many tag templates are configured.
    fn tag_count(&self) -> usize;
}

/// Template compilation or evaluation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("template '{slot}' failed: {reason}")]
pub struct TemplateError {
    /// Slot whose template failed.
    pub slot: TemplateSlot,
    /// Engine-provided failure description.
    pub reason: String,
}

impl TemplateError {
    /// Creates a template error for `slot`.
    #[must_use]
    pub fn new(slot: TemplateSlot, reason: impl Into<String>) -> Self {
        Self {
            slot,
            reason: reason.into(),
        }
    }
}
