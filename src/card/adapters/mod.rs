//! Adapter implementations for the card lookup port.

pub mod http;
pub mod memory;

pub use http::TrelloHttpClient;
pub use memory::InMemoryCardLookup;
