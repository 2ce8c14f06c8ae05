//! Harness tests mirroring how suites use card markers end to end.

use std::sync::Arc;

use crate::card::{
    adapters::InMemoryCardLookup,
    domain::{CardId, TrelloMarker},
};
use crate::config::{Settings, TrelloFileSection, TrelloOptions};
use crate::harness::{
    ExitStatus, HarnessError, RunSummary, Runner, TestFailure, TestId, TestRegistry, TrelloSession,
};
use crate::outcome::{RawOutcome, ReportedOutcome};
use rstest::{fixture, rstest};

const OPEN_CARDS: [&str; 2] = ["https://trello.com/c/open1234", "https://trello.com/c/open4321"];
const CLOSED_CARDS: [&str; 2] = ["https://trello.com/c/closed12", "https://trello.com/c/closed21"];

#[fixture]
fn tracker() -> InMemoryCardLookup {
    OPEN_CARDS
        .iter()
        .chain(CLOSED_CARDS.iter())
        .fold(InMemoryCardLookup::new(), |tracker, url| {
            let id = CardId::parse(url).expect("valid card url");
            let list = if id.as_str().starts_with("closed") {
                "Done"
            } else {
                "Not Done"
            };
            tracker.with_card_in_list(&id, list)
        })
}

fn settings(completed: &[&str], show_cards: bool) -> Settings {
    let options = TrelloOptions {
        completed: completed.iter().map(|name| (*name).to_owned()).collect(),
        show_cards,
        ..TrelloOptions::default()
    };
    Settings::merge(&options, TrelloFileSection::default())
}

fn passing() -> Result<(), TestFailure> {
    Ok(())
}

fn failing() -> Result<(), TestFailure> {
    Err("assert False".into())
}

async fn run(
    registry: &TestRegistry,
    tracker: InMemoryCardLookup,
    settings: Settings,
) -> (RunSummary, String) {
    let mut session = TrelloSession::new(settings, Arc::new(tracker));
    let mut out = Vec::new();
    let summary = Runner::new()
        .run(registry, &mut session, &mut out)
        .await
        .expect("write to memory");
    (summary, String::from_utf8(out).expect("utf-8 output"))
}

// ── Registration ────────────────────────────────────────────────────

#[rstest]
fn registry_rejects_duplicate_names() {
    let mut registry = TestRegistry::new();
    registry
        .register_plain("suite::test_func", passing)
        .expect("first registration");
    let result = registry.register_plain("suite::test_func", passing);

    assert!(matches!(result, Err(HarnessError::DuplicateTest(_))));
    assert_eq!(registry.len(), 1);
}

#[rstest]
fn registry_rejects_blank_names() {
    let mut registry = TestRegistry::new();
    assert!(matches!(
        registry.register_plain("  ", passing),
        Err(HarnessError::EmptyTestId)
    ));
}

#[rstest]
fn card_references_pair_tests_with_their_cards() {
    let mut registry = TestRegistry::new();
    registry
        .register(
            "suite::test_foo",
            TrelloMarker::cards(CLOSED_CARDS).expect("valid cards"),
            passing,
        )
        .expect("register")
        .register_plain("suite::test_bar", passing)
        .expect("register");

    let pairs = registry.card_references();

    assert_eq!(pairs.len(), 2);
    assert_eq!(
        pairs.first().map(|(id, cards)| (id.clone(), cards.len())),
        Some((TestId::new("suite::test_foo").expect("id"), 2))
    );
    assert!(pairs.get(1).is_some_and(|(_, cards)| cards.is_empty()));
}

// ── Outcomes ────────────────────────────────────────────────────────

#[rstest]
#[case::pass_without_card(&[], false, false, ReportedOutcome::Passed)]
#[case::fail_without_card(&[], true, false, ReportedOutcome::Failed)]
#[case::success_with_open_card(&OPEN_CARDS[..1], false, false, ReportedOutcome::XPassed)]
#[case::success_with_open_cards(&OPEN_CARDS, false, false, ReportedOutcome::XPassed)]
#[case::failure_with_open_card(&OPEN_CARDS[..1], true, false, ReportedOutcome::XFailed)]
#[case::failure_with_open_cards(&OPEN_CARDS, true, false, ReportedOutcome::XFailed)]
#[case::failure_with_closed_card(&CLOSED_CARDS[..1], true, false, ReportedOutcome::Failed)]
#[case::failure_with_closed_cards(&CLOSED_CARDS, true, false, ReportedOutcome::Failed)]
#[case::skip_with_open_card(&OPEN_CARDS[..1], true, true, ReportedOutcome::Skipped)]
#[case::skip_with_closed_card(&CLOSED_CARDS[..1], true, true, ReportedOutcome::Failed)]
#[tokio::test]
async fn single_test_outcomes(
    tracker: InMemoryCardLookup,
    #[case] cards: &[&str],
    #[case] fails: bool,
    #[case] skip: bool,
    #[case] expected: ReportedOutcome,
) {
    let mut marker = TrelloMarker::cards(cards.iter().copied()).expect("valid cards");
    if skip {
        marker = marker.skip();
    }
    let mut registry = TestRegistry::new();
    registry
        .register("suite::test_func", marker, if fails { failing } else { passing })
        .expect("register");

    let (summary, _) = run(&registry, tracker, settings(&["Done"], false)).await;

    assert_eq!(summary.counts().get(expected), 1);
    assert_eq!(summary.reports().len(), 1);
}

#[rstest]
#[tokio::test]
async fn failure_with_open_and_closed_cards_is_xfailed(tracker: InMemoryCardLookup) {
    let mut registry = TestRegistry::new();
    let all: Vec<&str> = OPEN_CARDS.iter().chain(CLOSED_CARDS.iter()).copied().collect();
    registry
        .register("suite::test_func", TrelloMarker::cards(all).expect("valid cards"), failing)
        .expect("register");

    let (summary, _) = run(&registry, tracker, settings(&["Done"], false)).await;

    assert_eq!(summary.counts().get(ReportedOutcome::XFailed), 1);
    assert_eq!(summary.exit_status(), ExitStatus::Ok);
}

#[rstest]
#[tokio::test]
async fn configured_completed_list_turns_xpass_into_pass(tracker: InMemoryCardLookup) {
    let mut registry = TestRegistry::new();
    registry
        .register(
            "suite::test_func",
            TrelloMarker::cards([OPEN_CARDS[0]]).expect("valid cards"),
            passing,
        )
        .expect("register");

    let (summary, _) = run(&registry, tracker, settings(&["Not Done"], false)).await;

    assert_eq!(summary.counts().get(ReportedOutcome::Passed), 1);
    assert_eq!(summary.exit_status(), ExitStatus::Ok);
}

#[rstest]
#[tokio::test]
async fn unreachable_tracker_falls_back_to_raw_outcome() {
    let mut registry = TestRegistry::new();
    registry
        .register(
            "suite::test_func",
            TrelloMarker::cards([OPEN_CARDS[0]]).expect("valid cards"),
            failing,
        )
        .expect("register");

    let (summary, _) = run(&registry, InMemoryCardLookup::new(), settings(&["Done"], false)).await;

    let report = summary.report("suite::test_func").expect("test ran");
    assert_eq!(report.raw, RawOutcome::Failed);
    assert_eq!(report.verdict.outcome(), ReportedOutcome::Failed);
    assert_eq!(summary.exit_status(), ExitStatus::TestsFailed);
}

#[rstest]
#[tokio::test]
async fn panicking_body_counts_as_failure(tracker: InMemoryCardLookup) {
    let mut registry = TestRegistry::new();
    registry
        .register(
            "suite::test_panics",
            TrelloMarker::cards([OPEN_CARDS[0]]).expect("valid cards"),
            || panic!("index out of bounds"),
        )
        .expect("register");

    let (summary, _) = run(&registry, tracker, settings(&["Done"], false)).await;

    let report = summary.report("suite::test_panics").expect("test ran");
    assert_eq!(report.failure.as_deref(), Some("index out of bounds"));
    assert_eq!(report.verdict.outcome(), ReportedOutcome::XFailed);
}

#[rstest]
#[tokio::test]
async fn empty_registry_reports_no_tests_collected(tracker: InMemoryCardLookup) {
    let (summary, output) = run(&TestRegistry::new(), tracker, settings(&[], false)).await;
    assert_eq!(summary.exit_status(), ExitStatus::NoTestsCollected);
    assert_eq!(summary.exit_status().code(), 5);
    assert!(output.contains("no tests ran"));
}

// ── Collection and report ───────────────────────────────────────────

#[rstest]
#[tokio::test]
async fn collection_announces_marker_count(tracker: InMemoryCardLookup) {
    let shared = Arc::new(tracker);
    let mut registry = TestRegistry::new();
    registry
        .register("suite::test_foo", TrelloMarker::cards(CLOSED_CARDS).expect("cards"), passing)
        .expect("register")
        .register("suite::test_bar", TrelloMarker::cards(OPEN_CARDS).expect("cards"), failing)
        .expect("register");
    let mut session = TrelloSession::new(settings(&["Done"], false), Arc::clone(&shared));
    let mut out = Vec::new();

    let summary = Runner::new()
        .run(&registry, &mut session, &mut out)
        .await
        .expect("write to memory");
    let output = String::from_utf8(out).expect("utf-8 output");

    assert!(output.contains("collected 4 trello markers"));
    assert_eq!(summary.counts().get(ReportedOutcome::Passed), 1);
    assert_eq!(summary.counts().get(ReportedOutcome::XFailed), 1);
    assert!(output.contains("1 passed, 1 xfailed"));
    for url in OPEN_CARDS.iter().chain(CLOSED_CARDS.iter()) {
        let id = CardId::parse(url).expect("valid card url");
        assert_eq!(shared.card_requests(&id), 1);
    }
}

#[rstest]
#[tokio::test]
async fn report_without_cards(tracker: InMemoryCardLookup) {
    let mut registry = TestRegistry::new();
    registry.register_plain("suite::test_func", passing).expect("register");

    let (summary, output) = run(&registry, tracker, settings(&["Done"], true)).await;

    assert_eq!(summary.exit_status(), ExitStatus::Ok);
    assert!(output.contains("= trello card report ="));
    assert!(output.contains("No trello cards collected"));
}

#[rstest]
#[tokio::test]
async fn report_with_cards(tracker: InMemoryCardLookup) {
    let mut registry = TestRegistry::new();
    registry
        .register(
            "report.rs::Test_Class::test_method",
            TrelloMarker::cards(CLOSED_CARDS).expect("cards"),
            passing,
        )
        .expect("register")
        .register("report.rs::test_func", TrelloMarker::cards(OPEN_CARDS).expect("cards"), passing)
        .expect("register");

    let (summary, output) = run(&registry, tracker, settings(&["Done"], true)).await;

    assert_eq!(summary.exit_status(), ExitStatus::Ok);
    for card in CLOSED_CARDS {
        assert!(output.lines().any(|line| line == format!("{card} [Done]")));
    }
    for card in OPEN_CARDS {
        assert!(output.lines().any(|line| line == format!("{card} [Not Done]")));
    }
    assert!(output.contains(" * report.rs::Test_Class::test_method: "));
    assert!(output.contains(" * report.rs::test_func: "));
}

#[rstest]
#[tokio::test]
async fn report_is_hidden_unless_requested(tracker: InMemoryCardLookup) {
    let mut registry = TestRegistry::new();
    registry
        .register("suite::test_func", TrelloMarker::cards(OPEN_CARDS).expect("cards"), passing)
        .expect("register");

    let (_, output) = run(&registry, tracker, settings(&["Done"], false)).await;

    assert!(!output.contains("trello card report"));
}
