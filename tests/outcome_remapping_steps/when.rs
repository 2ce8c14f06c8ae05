//! When steps for outcome remapping BDD scenarios.

use std::sync::Arc;

use super::world::{RemapWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use trello_gate::config::{Settings, TrelloFileSection, TrelloOptions};
use trello_gate::harness::{Runner, TrelloSession};

#[when("the test session runs")]
fn run_session(world: &mut RemapWorld) -> Result<(), eyre::Report> {
    let options = TrelloOptions {
        completed: world.completed.clone(),
        show_cards: world.show_cards,
        ..TrelloOptions::default()
    };
    let settings = Settings::merge(&options, TrelloFileSection::default());
    let mut session = TrelloSession::new(settings, Arc::new(world.tracker.clone()));
    let mut out = Vec::new();

    let summary = run_async(Runner::new().run(&world.registry, &mut session, &mut out))
        .wrap_err("run test session")?;

    world.output = String::from_utf8(out).wrap_err("decode session output")?;
    world.summary = Some(summary);
    Ok(())
}
