//! When steps for issue import BDD scenarios.

use super::world::ImportWorld;
use rstest_bdd_macros::when;

#[when("the issue is imported")]
fn import_issue(world: &mut ImportWorld) -> Result<(), eyre::Report> {
    let scope = world
        .scope
        .clone()
        .ok_or_else(|| eyre::eyre!("missing scope in scenario world"))?;
    let issue = world
        .issue
        .clone()
        .ok_or_else(|| eyre::eyre!("missing issue in scenario world"))?;
    world.last_import_result = Some(world.service.import_issue(&scope, &issue));
    Ok(())
}
