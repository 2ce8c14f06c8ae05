//! Shared world state for outcome remapping BDD scenarios.

use rstest::fixture;
use trello_gate::card::adapters::InMemoryCardLookup;
use trello_gate::harness::{RunSummary, TestRegistry};

/// Scenario world for outcome remapping behaviour tests.
pub struct RemapWorld {
    /// Seeded tracker shared with the session.
    pub tracker: InMemoryCardLookup,
    /// List names passed as `--trello-completed`.
    pub completed: Vec<String>,
    /// Whether `--show-trello-cards` is set.
    pub show_cards: bool,
    /// Tests registered by the scenario.
    pub registry: TestRegistry,
    /// Summary of the last run.
    pub summary: Option<RunSummary>,
    /// Everything the session wrote.
    pub output: String,
}

impl RemapWorld {
    /// Creates a world with an empty tracker and no registered tests.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: InMemoryCardLookup::new(),
            completed: Vec::new(),
            show_cards: false,
            registry: TestRegistry::new(),
            summary: None,
            output: String::new(),
        }
    }
}

impl Default for RemapWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RemapWorld {
    RemapWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated step argument.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
