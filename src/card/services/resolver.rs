//! Cached, best-effort card status resolution.

use crate::card::{
    domain::{CardId, CardResolution, CardStatus, CompletedLists},
    ports::{CardLookup, CardLookupResult},
};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Resolves cards to their list and completion state.
///
/// Each card identifier is looked up at most once per resolver; failed
/// lookups are cached as [`CardResolution::Unresolved`] and never retried.
pub struct CardStatusResolver<L>
where
    L: CardLookup,
{
    lookup: Arc<L>,
    completed_lists: CompletedLists,
    cache: RwLock<HashMap<CardId, CardResolution>>,
}

impl<L> CardStatusResolver<L>
where
    L: CardLookup,
{
    /// Creates a resolver with an empty cache.
    #[must_use]
    pub fn new(lookup: Arc<L>, completed_lists: CompletedLists) -> Self {
        Self {
            lookup,
            completed_lists,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the list names treated as completed.
    #[must_use]
    pub const fn completed_lists(&self) -> &CompletedLists {
        &self.completed_lists
    }

    /// Resolves a card, consulting the cache first.
    ///
    /// Lookup failures are logged and returned as
    /// [`CardResolution::Unresolved`]; they never abort the caller.
    pub async fn resolve(&self, card: &CardId) -> CardResolution {
        if let Some(cached) = self.cached(card) {
            debug!(%card, "card status cache hit");
            return cached;
        }

        let resolution = match self.fetch_status(card).await {
            Ok(status) => {
                debug!(
                    %card,
                    list = status.list_name(),
                    completed = status.is_completed(),
                    "resolved card status"
                );
                CardResolution::Resolved(status)
            }
            Err(err) => {
                warn!(
                    %card,
                    error = %err,
                    "unable to resolve trello card; treating as unresolved"
                );
                CardResolution::Unresolved {
                    reason: err.to_string(),
                }
            }
        };

        self.cache
            .write()
            .unwrap_or_else(|poisoned| {
                warn!(%card, "card status cache lock poisoned; recovering");
                PoisonError::into_inner(poisoned)
            })
            .insert(card.clone(), resolution.clone());
        resolution
    }

    /// Returns the cached resolution for a card without performing a lookup.
    #[must_use]
    pub fn cached(&self, card: &CardId) -> Option<CardResolution> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(card)
            .cloned()
    }

    async fn fetch_status(&self, card: &CardId) -> CardLookupResult<CardStatus> {
        let record = self.lookup.get_card(card).await?;
        let list = self.lookup.get_list(&record.id_list).await?;
        Ok(CardStatus::classify(list.name, &self.completed_lists))
    }
}
