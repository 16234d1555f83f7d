//! External issue payload as received from a tracker.

use super::IssueNumber;
use chrono::{DateTime, Utc};

/// External issue data consumed by the importer.
///
/// Nested tracker structures (author, milestone) are already flattened to
/// their display strings. Unset optional fields default to empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIssue {
    number: IssueNumber,
    title: String,
    created_at: DateTime<Utc>,
    author: String,
    body: String,
    closed: bool,
    closed_at: Option<DateTime<Utc>>,
    milestone: String,
    state: String,
    url: String,
}

impl ExternalIssue {
    /// Creates an issue with its required fields.
    #[must_use]
    pub fn new(number: IssueNumber, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            number,
            title: title.into(),
            created_at,
            author: String::new(),
            body: String::new(),
            closed: false,
            closed_at: None,
            milestone: String::new(),
            state: "open".to_owned(),
            url: String::new(),
        }
    }

    /// Sets the author display name.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the issue body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Marks the issue closed at the given time.
    ///
    /// Also sets the tracker state string to `closed`.
    #[must_use]
    pub fn closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed = true;
        self.closed_at = Some(closed_at);
        "closed".clone_into(&mut self.state);
        self
    }

    /// Sets the milestone title.
    #[must_use]
    pub fn with_milestone(mut self, milestone: impl Into<String>) -> Self {
        self.milestone = milestone.into();
        self
    }

    /// Sets the raw tracker state string.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the canonical issue URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Returns the issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the author display name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the issue body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns whether the issue is closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the close timestamp, if the issue is closed.
    #[must_use]
    pub const fn closed_time(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Returns the milestone title.
    #[must_use]
    pub fn milestone(&self) -> &str {
        &self.milestone
    }

    /// Returns the raw tracker state string.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the canonical issue URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
