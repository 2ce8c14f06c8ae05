//! Read-only tracker port for fetching cards and lists.

use crate::card::domain::{CardId, TrelloCard, TrelloList};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for card lookup operations.
pub type CardLookupResult<T> = Result<T, CardLookupError>;

/// Read-only tracker contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardLookup: Send + Sync {
    /// Fetches a card by identifier or short link.
    ///
    /// # Errors
    ///
    /// Returns [`CardLookupError::NotFound`] when the tracker has no such
    /// card, [`CardLookupError::Unauthorized`] when credentials are rejected,
    /// or [`CardLookupError::Transport`] for any other failure.
    async fn get_card(&self, id: &CardId) -> CardLookupResult<TrelloCard>;

    /// Fetches a list by identifier.
    ///
    /// # Errors
    ///
    /// Returns the same error variants as [`CardLookup::get_card`].
    async fn get_list(&self, id: &str) -> CardLookupResult<TrelloList>;
}

/// Errors returned by card lookup adapters.
#[derive(Debug, Clone, Error)]
pub enum CardLookupError {
    /// The requested object does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Object kind (`card` or `list`).
        kind: &'static str,
        /// Identifier that was requested.
        id: String,
    },

    /// The tracker rejected the configured key or token.
    #[error("tracker rejected credentials (HTTP {status})")]
    Unauthorized {
        /// HTTP status returned by the tracker.
        status: u16,
    },

    /// The tracker answered with an unexpected status.
    #[error("unexpected tracker response (HTTP {status}) for {id}")]
    UnexpectedStatus {
        /// HTTP status returned by the tracker.
        status: u16,
        /// Identifier that was requested.
        id: String,
    },

    /// Network, TLS or decoding failure.
    #[error("tracker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CardLookupError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
