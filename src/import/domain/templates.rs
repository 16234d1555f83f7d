//! Field-mapping templates applied to each imported issue.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target slot a template renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSlot {
    /// Task summary.
    Summary,
    /// Task project.
    Project,
    /// Task priority.
    Priority,
    /// Task notes.
    Notes,
    /// Tag template at the given list position.
    Tag(usize),
}

impl fmt::Display for TemplateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Project => write!(f, "project"),
            Self::Priority => write!(f, "priority"),
            Self::Notes => write!(f, "notes"),
            Self::Tag(index) => write!(f, "tags[{index}]"),
        }
    }
}

/// Template sources for every task field projected from an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IssueTemplates {
    /// Summary template.
    pub summary: String,
    /// Project template.
    pub project: String,
    /// Priority template.
    pub priority: String,
    /// Notes template.
    pub notes: String,
    /// Tag templates, rendered in order.
    pub tags: Vec<String>,
}

impl IssueTemplates {
    /// Returns the template source for `slot`, if it exists.
    #[must_use]
    pub fn source(&self, slot: TemplateSlot) -> Option<&str> {
        match slot {
            TemplateSlot::Summary => Some(&self.summary),
            TemplateSlot::Project => Some(&self.project),
            TemplateSlot::Priority => Some(&self.priority),
            TemplateSlot::Notes => Some(&self.notes),
            TemplateSlot::Tag(index) => self.tags.get(index).map(String::as_str),
        }
    }

    /// Returns every slot in render order.
    #[must_use]
    pub fn slots(&self) -> Vec<TemplateSlot> {
        let scalar = [
            TemplateSlot::Summary,
            TemplateSlot::Project,
            TemplateSlot::Priority,
            TemplateSlot::Notes,
        ];
        scalar
            .into_iter()
            .chain((0..self.tags.len()).map(TemplateSlot::Tag))
            .collect()
    }
}

impl Default for IssueTemplates {
    fn default() -> Self {
        Self {
            summary: "{{ title }}".to_owned(),
            project: "{{ repo_name }}".to_owned(),
            priority: "P2".to_owned(),
            notes: "{{ url }}\n\n{{ body }}".to_owned(),
            tags: vec!["{{ milestone }}".to_owned()],
        }
    }
}
