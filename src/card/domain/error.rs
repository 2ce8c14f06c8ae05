//! Error types for card reference validation.

use thiserror::Error;

/// Errors returned while constructing card domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardDomainError {
    /// The card reference is empty after trimming.
    #[error("card reference must not be empty")]
    EmptyCardReference,

    /// The value is a URL that does not point at a Trello card.
    #[error("'{0}' is not a Trello card URL, expected https://trello.com/c/<id>")]
    NotACardUrl(String),

    /// The bare identifier contains characters Trello never emits.
    #[error("invalid card identifier '{0}'")]
    InvalidCardId(String),
}
