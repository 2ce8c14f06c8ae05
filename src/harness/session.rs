//! Per-run session state: the hooks a runner calls into.

use super::TestId;
use crate::card::{domain::CardRef, ports::CardLookup, services::CardStatusResolver};
use crate::config::Settings;
use crate::outcome::{OutcomeRemapper, RawOutcome, Verdict};
use crate::report::ReportCollector;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

/// Trello integration state for one run.
///
/// Owns the settings, the card cache (through the resolver) and the report
/// collector. The cache lives exactly as long as the session.
pub struct TrelloSession<L>
where
    L: CardLookup,
{
    settings: Settings,
    remapper: OutcomeRemapper<L>,
    collector: ReportCollector,
}

impl<L> TrelloSession<L>
where
    L: CardLookup,
{
    /// Creates a session over an arbitrary tracker.
    #[must_use]
    pub fn new(settings: Settings, lookup: Arc<L>) -> Self {
        let resolver = CardStatusResolver::new(lookup, settings.completed_lists().clone());
        Self {
            settings,
            remapper: OutcomeRemapper::new(Arc::new(resolver)),
            collector: ReportCollector::new(),
        }
    }

    /// Returns the run settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the report collected so far.
    #[must_use]
    pub const fn collector(&self) -> &ReportCollector {
        &self.collector
    }

    /// Collection hook: resolves every referenced card and records it for
    /// the report, then announces how many card references were found.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer.
    pub async fn collect(
        &mut self,
        items: &[(TestId, Vec<CardRef>)],
        out: &mut impl Write,
    ) -> io::Result<()> {
        for (test, cards) in items {
            let evaluated = self.remapper.evaluate(cards).await;
            self.collector.record(test.as_str(), &evaluated);
        }
        let markers = self.collector.marker_count();
        info!(markers, tests = items.len(), "collected trello markers");
        writeln!(out, "collected {markers} trello markers")
    }

    /// Outcome hook: remaps a test's raw outcome from its cards.
    pub async fn verdict(&self, cards: &[CardRef], raw: RawOutcome) -> Verdict {
        self.remapper.remap(cards, raw).await
    }

    /// Terminal summary hook: prints the card report when enabled.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer.
    pub fn terminal_summary(&self, out: &mut impl Write) -> io::Result<()> {
        if self.settings.show_cards() {
            self.collector.render(out)?;
        }
        Ok(())
    }
}
