//! Domain model for Trello card references and resolved card status.
//!
//! Values here are pure: parsing, validation and classification only. All
//! network access happens behind the lookup port.

mod error;
mod ids;
mod records;
mod reference;
mod status;

pub use error::CardDomainError;
pub use ids::CardId;
pub use records::{TrelloCard, TrelloList};
pub use reference::{CardRef, TrelloMarker};
pub use status::{CardResolution, CardStatus, CompletedLists};
