//! In-memory tracker for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::card::{
    domain::{CardId, TrelloCard, TrelloList},
    ports::{CardLookup, CardLookupError, CardLookupResult},
};

/// Thread-safe in-memory tracker.
///
/// Cards and lists are seeded up front. Every `get_card` call is counted so
/// callers can assert on lookup traffic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCardLookup {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    cards: HashMap<CardId, TrelloCard>,
    lists: HashMap<String, TrelloList>,
    failures: HashMap<CardId, CardLookupError>,
    card_requests: HashMap<CardId, usize>,
}

fn poisoned(err: impl ToString) -> CardLookupError {
    CardLookupError::transport(std::io::Error::other(err.to_string()))
}

fn list_id_for(list_name: &str) -> String {
    let slug: String = list_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("list-{slug}")
}

impl InMemoryCardLookup {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a card inside a list with the given name, creating the list
    /// when it does not exist yet.
    #[must_use]
    pub fn with_card_in_list(self, card_id: &CardId, list_name: &str) -> Self {
        let list_id = list_id_for(list_name);
        {
            let mut state = self.seed();
            state
                .lists
                .entry(list_id.clone())
                .or_insert_with(|| TrelloList {
                    id: list_id.clone(),
                    name: list_name.to_owned(),
                    closed: false,
                });
            state.cards.insert(
                card_id.clone(),
                TrelloCard {
                    id: card_id.as_str().to_owned(),
                    name: format!("card {card_id}"),
                    closed: false,
                    id_list: list_id,
                    url: Some(format!("https://trello.com/c/{card_id}")),
                },
            );
        }
        self
    }

    /// Seeds a raw card record. The referenced list may be absent, which
    /// makes list lookups for the card fail with `NotFound`.
    #[must_use]
    pub fn with_card(self, card_id: &CardId, card: TrelloCard) -> Self {
        self.seed().cards.insert(card_id.clone(), card);
        self
    }

    /// Makes lookups for the card fail with the given error.
    #[must_use]
    pub fn with_failure(self, card_id: &CardId, error: CardLookupError) -> Self {
        self.seed().failures.insert(card_id.clone(), error);
        self
    }

    /// Returns how many times the card was requested.
    #[must_use]
    pub fn card_requests(&self, card_id: &CardId) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .card_requests
            .get(card_id)
            .copied()
            .unwrap_or(0)
    }

    /// Seeding recovers a poisoned lock so no fixture write is lost.
    fn seed(&self) -> RwLockWriteGuard<'_, InMemoryTrackerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CardLookup for InMemoryCardLookup {
    async fn get_card(&self, id: &CardId) -> CardLookupResult<TrelloCard> {
        let mut state = self.state.write().map_err(poisoned)?;
        *state.card_requests.entry(id.clone()).or_insert(0) += 1;
        if let Some(error) = state.failures.get(id) {
            return Err(error.clone());
        }
        state
            .cards
            .get(id)
            .cloned()
            .ok_or_else(|| CardLookupError::NotFound {
                kind: "card",
                id: id.to_string(),
            })
    }

    async fn get_list(&self, id: &str) -> CardLookupResult<TrelloList> {
        let state = self.state.read().map_err(poisoned)?;
        state
            .lists
            .get(id)
            .cloned()
            .ok_or_else(|| CardLookupError::NotFound {
                kind: "list",
                id: id.to_owned(),
            })
    }
}
