//! Card references attached to tests.

use super::{CardDomainError, CardId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card referenced by a test, with the flag asking for the test to be
/// skipped while the card is still open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    url: String,
    id: CardId,
    skip: bool,
}

impl CardRef {
    /// Parses a card URL (or bare identifier) into a reference.
    ///
    /// # Errors
    ///
    /// Returns [`CardDomainError`] when the identifier cannot be extracted.
    pub fn parse(url: impl Into<String>) -> Result<Self, CardDomainError> {
        let raw = url.into();
        let id = CardId::parse(&raw)?;
        Ok(Self {
            url: raw.trim().to_owned(),
            id,
            skip: false,
        })
    }

    /// Marks the reference as skip-while-open.
    #[must_use]
    pub const fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Returns the card URL as written by the test author.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the parsed card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns whether the test should be skipped while the card is open.
    #[must_use]
    pub const fn skip(&self) -> bool {
        self.skip
    }
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// The set of cards registered against one test.
///
/// Built with [`TrelloMarker::cards`]; [`TrelloMarker::skip`] applies the
/// skip flag to every card in the marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrelloMarker {
    cards: Vec<CardRef>,
}

impl TrelloMarker {
    /// Registration text shown in marker listings.
    pub const DESCRIPTION: &'static str = "@trello(*cards): Trello card integration";

    /// Creates a marker from card URLs.
    ///
    /// # Errors
    ///
    /// Returns the first [`CardDomainError`] raised by an invalid URL.
    pub fn cards<I, S>(urls: I) -> Result<Self, CardDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards = urls
            .into_iter()
            .map(CardRef::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Sets the skip flag on every card.
    #[must_use]
    pub fn skip(self) -> Self {
        Self {
            cards: self
                .cards
                .into_iter()
                .map(|card| card.with_skip(true))
                .collect(),
        }
    }

    /// Returns the referenced cards.
    #[must_use]
    pub fn references(&self) -> &[CardRef] {
        &self.cards
    }

    /// Consumes the marker, returning its references.
    #[must_use]
    pub fn into_references(self) -> Vec<CardRef> {
        self.cards
    }
}
