//! Resolved card status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Names of the lists whose cards count as done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedLists(BTreeSet<String>);

impl CompletedLists {
    /// Creates a completed set from list names. Blank names are dropped and
    /// surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self(
            names
                .into_iter()
                .map(|name| name.trim().to_owned())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Returns whether the list name is considered completed.
    #[must_use]
    pub fn contains(&self, list_name: &str) -> bool {
        self.0.contains(list_name.trim())
    }

    /// Returns `true` when no list is configured as completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the configured list names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Status of a card whose list was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStatus {
    list_name: String,
    completed: bool,
}

impl CardStatus {
    /// Classifies a card by the name of its containing list.
    #[must_use]
    pub fn classify(list_name: impl Into<String>, completed_lists: &CompletedLists) -> Self {
        let name = list_name.into();
        let completed = completed_lists.contains(&name);
        Self {
            list_name: name,
            completed,
        }
    }

    /// Returns the containing list's name.
    #[must_use]
    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    /// Returns whether the card's list is in the completed set.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the card is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.completed
    }
}

/// Outcome of a single card lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardResolution {
    /// The card and its list were fetched.
    Resolved(CardStatus),
    /// The lookup failed; the card does not influence test outcomes.
    Unresolved {
        /// Human-readable failure description.
        reason: String,
    },
}

impl CardResolution {
    /// Returns the resolved status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&CardStatus> {
        match self {
            Self::Resolved(status) => Some(status),
            Self::Unresolved { .. } => None,
        }
    }

    /// Returns `true` only for a resolved card that is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status().is_some_and(CardStatus::is_open)
    }
}
