//! Then steps for issue import BDD scenarios.

use super::world::ImportWorld;
use issue_import::import::{
    domain::{LocalTask, TaskStatus},
    ports::{TaskStore, TaskStoreError},
    services::{ImportError, ReconcileError},
};
use rstest_bdd_macros::then;

fn stored_task(world: &ImportWorld) -> Result<LocalTask, eyre::Report> {
    let id = world.task_id()?;
    let holding = world.partitions_holding_task()?;
    let [status] = holding[..] else {
        return Err(eyre::eyre!("expected exactly one stored copy of {id}"));
    };
    let raw = world.store.read(id, status)?;
    Ok(world.store.decode(id, status, &raw)?)
}

#[then(r#"the task is stored in the "{status}" partition only"#)]
fn stored_in_partition_only(world: &ImportWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let holding = world.partitions_holding_task()?;
    if holding != [expected] {
        return Err(eyre::eyre!(
            "expected the task only in '{expected}', found it in {holding:?}"
        ));
    }
    Ok(())
}

#[then(r#"the task notes are "{notes}""#)]
fn task_notes_are(world: &ImportWorld, notes: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    if task.notes() != notes {
        return Err(eyre::eyre!(
            "expected notes {notes:?}, found {:?}",
            task.notes()
        ));
    }
    Ok(())
}

#[then(r#"the task summary is "{summary}""#)]
fn task_summary_is(world: &ImportWorld, summary: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    if task.summary() != summary {
        return Err(eyre::eyre!(
            "expected summary {summary:?}, found {:?}",
            task.summary()
        ));
    }
    Ok(())
}

#[then("the import fails with a decode error")]
fn import_fails_with_decode_error(world: &ImportWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_import_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing import result in scenario world"))?;
    if !matches!(
        result,
        Err(ImportError::Reconcile(ReconcileError::Lookup {
            source: TaskStoreError::Decode { .. },
            ..
        }))
    ) {
        return Err(eyre::eyre!("expected a decode error, got {result:?}"));
    }
    Ok(())
}
