//! Given steps for issue import BDD scenarios.

use super::world::{ImportWorld, issue_created_at};
use eyre::WrapErr;
use issue_import::import::{
    domain::{ExternalIssue, IssueNumber, IssueScope, TaskStatus},
    ports::TaskStore,
};
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &mut ImportWorld) -> Result<(), eyre::Report> {
    for status in TaskStatus::ALL {
        if !world.store.ids_in(status)?.is_empty() {
            return Err(eyre::eyre!("expected empty '{status}' partition"));
        }
    }
    Ok(())
}

#[given(r#"an open issue "{owner}" "{name}" #{number:u64} titled "{title}""#)]
fn open_issue(
    world: &mut ImportWorld,
    owner: String,
    name: String,
    number: u64,
    title: String,
) -> Result<(), eyre::Report> {
    let url = format!("https://github.com/{owner}/{name}/issues/{number}");
    world.scope = Some(IssueScope::github(owner, name).wrap_err("construct issue scope")?);
    world.issue = Some(
        ExternalIssue::new(
            IssueNumber::new(number).wrap_err("construct issue number")?,
            title,
            issue_created_at()?,
        )
        .with_author("octocat")
        .with_url(url),
    );
    Ok(())
}

#[given("the issue has already been imported")]
fn issue_already_imported(world: &mut ImportWorld) -> Result<(), eyre::Report> {
    let scope = world
        .scope
        .clone()
        .ok_or_else(|| eyre::eyre!("missing scope in scenario world"))?;
    let issue = world
        .issue
        .clone()
        .ok_or_else(|| eyre::eyre!("missing issue in scenario world"))?;
    world
        .service
        .import_issue(&scope, &issue)
        .wrap_err("initial import")?;
    Ok(())
}

#[given(r#"the task was moved locally to "{status}" with notes "{notes}""#)]
fn task_moved_locally(
    world: &mut ImportWorld,
    status: String,
    notes: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let target = TaskStatus::try_from(status.as_str())?;
    let holding = world.partitions_holding_task()?;
    let [current] = holding[..] else {
        return Err(eyre::eyre!("expected exactly one stored copy of {id}"));
    };

    let raw = world.store.read(id, current)?;
    let mut task = world.store.decode(id, current, &raw)?;
    world.store.remove(id, current)?;
    task.set_status(target);
    task.set_notes(notes);
    world.store.write(&task)?;
    Ok(())
}

#[given("the issue is closed upstream")]
fn issue_closed_upstream(world: &mut ImportWorld) -> Result<(), eyre::Report> {
    let issue = world
        .issue
        .take()
        .ok_or_else(|| eyre::eyre!("missing issue in scenario world"))?;
    let closed = issue.created_at() + chrono::Duration::days(2);
    world.issue = Some(issue.closed_at(closed));
    Ok(())
}

#[given(r#"the issue is retitled upstream to "{title}""#)]
fn issue_retitled_upstream(world: &mut ImportWorld, title: String) -> Result<(), eyre::Report> {
    let issue = world
        .issue
        .take()
        .ok_or_else(|| eyre::eyre!("missing issue in scenario world"))?;
    let retitled = ExternalIssue::new(issue.number(), title, issue.created_at())
        .with_author(issue.author())
        .with_url(issue.url());
    world.issue = Some(retitled);
    Ok(())
}

#[given(r#"the local copy in "{status}" is corrupt"#)]
fn corrupt_local_copy(world: &mut ImportWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let partition = TaskStatus::try_from(status.as_str())?;
    let directory = world.root.join(partition.as_str());
    std::fs::create_dir_all(&directory).wrap_err("create partition directory")?;
    std::fs::write(directory.join(format!("{id}.yml")), "summary: [unterminated\n")
        .wrap_err("write corrupt record")?;
    Ok(())
}
