//! Card report collection and rendering.

use crate::card::domain::CardId;
use crate::outcome::EvaluatedCard;
use std::collections::HashSet;
use std::io::{self, Write};

/// Title shown in the report banner.
pub const REPORT_TITLE: &str = "trello card report";

const TERMINAL_WIDTH: usize = 80;

/// A distinct resolved card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedCard {
    id: CardId,
    url: String,
    list_name: String,
}

impl ReportedCard {
    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the card URL as first referenced.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the name of the card's list.
    #[must_use]
    pub fn list_name(&self) -> &str {
        &self.list_name
    }
}

/// The cards referenced by one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCards {
    test: String,
    urls: Vec<String>,
}

impl TestCards {
    /// Returns the fully qualified test name.
    #[must_use]
    pub fn test(&self) -> &str {
        &self.test
    }

    /// Returns the referenced card URLs in marker order.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

/// Accumulates card references across a run.
#[derive(Debug, Clone, Default)]
pub struct ReportCollector {
    cards: Vec<ReportedCard>,
    seen: HashSet<CardId>,
    tests: Vec<TestCards>,
}

impl ReportCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the evaluated cards of one test. Tests without cards are
    /// ignored.
    pub fn record(&mut self, test: &str, cards: &[EvaluatedCard]) {
        if cards.is_empty() {
            return;
        }
        for card in cards {
            let Some(status) = card.resolution().status() else {
                continue;
            };
            let id = card.reference().id();
            if self.seen.insert(id.clone()) {
                self.cards.push(ReportedCard {
                    id: id.clone(),
                    url: card.reference().url().to_owned(),
                    list_name: status.list_name().to_owned(),
                });
            }
        }
        self.tests.push(TestCards {
            test: test.to_owned(),
            urls: cards
                .iter()
                .map(|card| card.reference().url().to_owned())
                .collect(),
        });
    }

    /// Returns the distinct resolved cards in first-seen order.
    #[must_use]
    pub fn cards(&self) -> &[ReportedCard] {
        &self.cards
    }

    /// Returns the tests that referenced at least one card.
    #[must_use]
    pub fn tests(&self) -> &[TestCards] {
        &self.tests
    }

    /// Returns the number of card references recorded across all tests.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.tests.iter().map(|test| test.urls.len()).sum()
    }

    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", separator(REPORT_TITLE, TERMINAL_WIDTH))?;
        if self.cards.is_empty() {
            return writeln!(out, "No trello cards collected");
        }
        for card in &self.cards {
            writeln!(out, "{} [{}]", card.url, card.list_name)?;
        }
        for test in &self.tests {
            writeln!(out, " * {}: {}", test.test, test.urls.join(", "))?;
        }
        Ok(())
    }
}

/// Centres a title in a line of `=` characters, e.g.
/// `===== trello card report =====`.
#[must_use]
pub fn separator(title: &str, width: usize) -> String {
    let label = format!(" {title} ");
    let fill = width.saturating_sub(label.chars().count()).max(2);
    let left = fill.div_euclid(2);
    let right = fill.saturating_sub(left);
    format!("{}{label}{}", "=".repeat(left), "=".repeat(right))
}
