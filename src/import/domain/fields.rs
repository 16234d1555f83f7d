//! Flat template view over an external issue.

use super::{ExternalIssue, IssueKey, IssueScope, TaskId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flat projection of an issue and its scope.
///
/// Every value sits at the top level so templates can address it by name,
/// for example `{{ repo_name }}` or `{{ title }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFields {
    /// Derived stable task identifier.
    pub uuid: String,
    /// Provider name (`github` or `gitlab`).
    pub provider: String,
    /// Scope owner.
    pub repo_owner: String,
    /// Scope repository name.
    pub repo_name: String,
    /// Author display name.
    pub author: String,
    /// Issue body.
    pub body: String,
    /// Whether the issue is closed.
    pub closed: bool,
    /// Close timestamp, if closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Milestone title.
    pub milestone: String,
    /// Issue number.
    pub number: u64,
    /// Raw tracker state string.
    pub state: String,
    /// Issue title.
    pub title: String,
    /// Canonical issue URL.
    pub url: String,
}

impl IssueFields {
    /// Builds the view for `issue` within `scope`.
    ///
    /// Returns the derived task identifier alongside the view.
    #[must_use]
    pub fn project(scope: &IssueScope, issue: &ExternalIssue) -> (TaskId, Self) {
        let task_id = IssueKey::new(scope.clone(), issue.number()).task_id();
        let fields = Self {
            uuid: task_id.to_string(),
            provider: scope.provider().as_str().to_owned(),
            repo_owner: scope.owner().to_owned(),
            repo_name: scope.name().to_owned(),
            author: issue.author().to_owned(),
            body: issue.body().to_owned(),
            closed: issue.is_closed(),
            closed_at: issue.closed_time(),
            created_at: issue.created_at(),
            milestone: issue.milestone().to_owned(),
            number: issue.number().value(),
            state: issue.state().to_owned(),
            title: issue.title().to_owned(),
            url: issue.url().to_owned(),
        };
        (task_id, fields)
    }
}
