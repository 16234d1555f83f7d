//! Builds candidate task records from external issues.

use tracing::debug;

use crate::import::{
    domain::{
        ExternalIssue, IssueFields, IssueScope, LocalTask, LocalTaskData, TaskStatus,
        TemplateSlot,
    },
    ports::{TemplateError, TemplateRenderer},
};

/// Builds the candidate task for `issue` within `scope`.
///
/// The identifier is derived from the scope and issue number. Summary,
/// project, priority, notes, and tags are rendered through `renderer` in
/// that order. A tag template that renders to an empty string adds no tag.
///
/// # Errors
///
/// Returns the first [`TemplateError`]; no partial task is produced.
pub fn build_task<R>(
    renderer: &R,
    scope: &IssueScope,
    issue: &ExternalIssue,
) -> Result<LocalTask, TemplateError>
where
    R: TemplateRenderer + ?Sized,
{
    let (id, fields) = IssueFields::project(scope, issue);

    let summary = renderer.render(TemplateSlot::Summary, &fields)?;
    let project = renderer.render(TemplateSlot::Project, &fields)?;
    let priority = renderer.render(TemplateSlot::Priority, &fields)?;
    let notes = renderer.render(TemplateSlot::Notes, &fields)?;

    let mut tags = Vec::with_capacity(renderer.tag_count());
    for index in 0..renderer.tag_count() {
        let tag = renderer.render(TemplateSlot::Tag(index), &fields)?;
        if !tag.is_empty() {
            tags.push(tag);
        }
    }

    let (status, resolved) = if issue.is_closed() {
        (TaskStatus::Resolved, issue.closed_time())
    } else {
        (TaskStatus::Pending, None)
    };

    debug!(task_id = %id, issue = %issue.number(), scope = %scope, %status, "built candidate task");

    Ok(LocalTask::from_data(LocalTaskData {
        id,
        status,
        created: issue.created_at(),
        resolved,
        summary,
        project,
        priority,
        notes,
        tags,
    }))
}
