//! Card-driven outcome decision.

use super::{EvaluatedCard, RawOutcome, ReportedOutcome, Verdict};
use crate::card::{domain::CardRef, ports::CardLookup, services::CardStatusResolver};
use std::sync::Arc;

/// Decides the reported outcome of a test.
///
/// Only resolved, open cards matter. With none the raw outcome stands. With
/// at least one, a failure becomes `Skipped` when any open card carries the
/// skip flag and `XFailed` otherwise, and a pass becomes `XPassed`.
#[must_use]
pub fn decide(cards: &[EvaluatedCard], raw: RawOutcome) -> Verdict {
    let open: Vec<&EvaluatedCard> = cards.iter().filter(|card| card.is_open()).collect();
    if open.is_empty() {
        return Verdict::unchanged(raw);
    }

    let reason = format!(
        "open trello card(s): {}",
        open.iter()
            .map(|card| card.reference().url())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let outcome = match raw {
        RawOutcome::Failed if open.iter().any(|card| card.reference().skip()) => {
            ReportedOutcome::Skipped
        }
        RawOutcome::Failed => ReportedOutcome::XFailed,
        RawOutcome::Passed => ReportedOutcome::XPassed,
    };
    Verdict::remapped(outcome, reason)
}

/// Applies card status to raw test outcomes.
pub struct OutcomeRemapper<L>
where
    L: CardLookup,
{
    resolver: Arc<CardStatusResolver<L>>,
}

impl<L> Clone for OutcomeRemapper<L>
where
    L: CardLookup,
{
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<L> OutcomeRemapper<L>
where
    L: CardLookup,
{
    /// Creates a remapper backed by a shared resolver.
    #[must_use]
    pub const fn new(resolver: Arc<CardStatusResolver<L>>) -> Self {
        Self { resolver }
    }

    /// Resolves every referenced card, in order.
    pub async fn evaluate(&self, cards: &[CardRef]) -> Vec<EvaluatedCard> {
        let mut evaluated = Vec::with_capacity(cards.len());
        for card in cards {
            let resolution = self.resolver.resolve(card.id()).await;
            evaluated.push(EvaluatedCard::new(card.clone(), resolution));
        }
        evaluated
    }

    /// Resolves the cards and decides the reported outcome.
    pub async fn remap(&self, cards: &[CardRef], raw: RawOutcome) -> Verdict {
        let evaluated = self.evaluate(cards).await;
        decide(&evaluated, raw)
    }
}
