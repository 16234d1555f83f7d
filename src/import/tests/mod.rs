//! Unit tests for issue import.


use crate::import::domain::{
    ExternalIssue, IssueNumber, IssueScope, LocalTask, LocalTaskData, TaskId, TaskStatus,
};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed creation time shared by test issues.
pub(super) fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Scope `github/acme/widgets`.
pub(super) fn acme_scope() -> IssueScope {
    IssueScope::github("acme", "widgets").expect("valid scope")
}

/// Open issue #42 titled "Fix bug".
pub(super) fn open_issue() -> ExternalIssue {
    ExternalIssue::new(
        IssueNumber::new(42).expect("valid issue number"),
        "Fix bug",
        created_at(),
    )
    .with_author("octocat")
    .with_body("Widgets fall over on Tuesdays.")
    .with_milestone("v1.0")
    .with_url("https://github.com/acme/widgets/issues/42")
}

/// Task with the given identity, status, and notes.
pub(super) fn task_with(id: TaskId, status: TaskStatus, notes: &str) -> LocalTask {
    LocalTask::from_data(LocalTaskData {
        id,
        status,
        created: created_at(),
        resolved: None,
        summary: "Fix bug".to_owned(),
        project: "widgets".to_owned(),
        priority: "P2".to_owned(),
        notes: notes.to_owned(),
        tags: vec!["v1.0".to_owned()],
    })
}
