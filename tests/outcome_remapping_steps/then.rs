//! Then steps for outcome remapping BDD scenarios.

use super::world::RemapWorld;
use rstest_bdd_macros::then;
use trello_gate::card::domain::CardId;
use trello_gate::harness::RunSummary;
use trello_gate::outcome::ReportedOutcome;

fn summary(world: &RemapWorld) -> Result<&RunSummary, eyre::Report> {
    world
        .summary
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing run summary in scenario world"))
}

#[then(r#"test "{test}" is reported as "{outcome}""#)]
fn test_reported_as(world: &RemapWorld, test: String, outcome: String) -> Result<(), eyre::Report> {
    let expected: ReportedOutcome = outcome.parse()?;
    let report = summary(world)?
        .report(&test)
        .ok_or_else(|| eyre::eyre!("test {test} did not run"))?;

    let actual = report.verdict.outcome();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {test} to be {expected}, found {actual}"
        ));
    }
    Ok(())
}

#[then("the run exits with code {code:u64}")]
fn run_exits_with(world: &RemapWorld, code: u64) -> Result<(), eyre::Report> {
    let actual = summary(world)?.exit_status().code();
    if u64::from(actual) != code {
        return Err(eyre::eyre!("expected exit code {code}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the output contains "{text}""#)]
fn output_contains(world: &RemapWorld, text: String) -> Result<(), eyre::Report> {
    if !world.output.contains(&text) {
        return Err(eyre::eyre!(
            "expected output to contain {text:?}, got:\n{}",
            world.output
        ));
    }
    Ok(())
}

#[then(r#"card "{card}" was looked up once"#)]
fn card_looked_up_once(world: &RemapWorld, card: String) -> Result<(), eyre::Report> {
    let id = CardId::new(card)?;
    let requests = world.tracker.card_requests(&id);
    if requests != 1 {
        return Err(eyre::eyre!("expected one lookup of {id}, found {requests}"));
    }
    Ok(())
}
