//! Given steps for outcome remapping BDD scenarios.

use super::world::{RemapWorld, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use trello_gate::card::domain::{CardId, TrelloMarker};
use trello_gate::harness::TestFailure;

fn passing() -> Result<(), TestFailure> {
    Ok(())
}

fn failing() -> Result<(), TestFailure> {
    Err("assert False".into())
}

#[given(r#"card "{card}" is in list "{list}""#)]
fn card_in_list(world: &mut RemapWorld, card: String, list: String) -> Result<(), eyre::Report> {
    let id = CardId::new(card).wrap_err("construct card identifier")?;
    world.tracker = world.tracker.clone().with_card_in_list(&id, &list);
    Ok(())
}

#[given(r#"the completed lists are "{lists}""#)]
fn completed_lists(world: &mut RemapWorld, lists: String) {
    world.completed = split_list(&lists);
}

#[given("the card report is enabled")]
fn card_report_enabled(world: &mut RemapWorld) {
    world.show_cards = true;
}

#[given(r#"a failing test "{test}" referencing cards "{cards}""#)]
fn failing_test_with_cards(
    world: &mut RemapWorld,
    test: String,
    cards: String,
) -> Result<(), eyre::Report> {
    let marker = TrelloMarker::cards(split_list(&cards)).wrap_err("parse card marker")?;
    world
        .registry
        .register(test, marker, failing)
        .wrap_err("register failing test")?;
    Ok(())
}

#[given(r#"a passing test "{test}" referencing cards "{cards}""#)]
fn passing_test_with_cards(
    world: &mut RemapWorld,
    test: String,
    cards: String,
) -> Result<(), eyre::Report> {
    let marker = TrelloMarker::cards(split_list(&cards)).wrap_err("parse card marker")?;
    world
        .registry
        .register(test, marker, passing)
        .wrap_err("register passing test")?;
    Ok(())
}

#[given(r#"a failing test "{test}" skipped while cards "{cards}" are open"#)]
fn failing_test_skipped_while_open(
    world: &mut RemapWorld,
    test: String,
    cards: String,
) -> Result<(), eyre::Report> {
    let marker = TrelloMarker::cards(split_list(&cards))
        .wrap_err("parse card marker")?
        .skip();
    world
        .registry
        .register(test, marker, failing)
        .wrap_err("register skipped test")?;
    Ok(())
}

#[given(r#"a passing test "{test}" without cards"#)]
fn passing_test_without_cards(world: &mut RemapWorld, test: String) -> Result<(), eyre::Report> {
    world
        .registry
        .register_plain(test, passing)
        .wrap_err("register plain test")?;
    Ok(())
}
