//! Card identifier parsing.

use super::CardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Path segment that precedes the card short link in Trello card URLs.
const CARD_PATH_SEGMENT: &str = "c";

/// Trello card identifier or short link.
///
/// Accepts either a card URL such as `https://trello.com/c/open1234` (an
/// optional trailing slug like `/42-fix-login` is ignored) or a bare
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a validated bare card identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardDomainError::EmptyCardReference`] for blank input and
    /// [`CardDomainError::InvalidCardId`] when the value is not a single
    /// alphanumeric token.
    pub fn new(value: impl Into<String>) -> Result<Self, CardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(CardDomainError::EmptyCardReference);
        }
        if !normalized
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        {
            return Err(CardDomainError::InvalidCardId(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Extracts a card identifier from a card URL or bare identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardDomainError::NotACardUrl`] when the value parses as a
    /// URL without a `/c/<id>` path, or any error from [`CardId::new`].
    pub fn parse(value: &str) -> Result<Self, CardDomainError> {
        let trimmed = value.trim();
        match Url::parse(trimmed) {
            Ok(url) => Self::from_url(&url, trimmed),
            Err(_) => Self::new(trimmed),
        }
    }

    fn from_url(url: &Url, raw: &str) -> Result<Self, CardDomainError> {
        let mut segments = url
            .path_segments()
            .ok_or_else(|| CardDomainError::NotACardUrl(raw.to_owned()))?
            .filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next()) {
            (Some(CARD_PATH_SEGMENT), Some(id)) => Self::new(id),
            _ => Err(CardDomainError::NotACardUrl(raw.to_owned())),
        }
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
