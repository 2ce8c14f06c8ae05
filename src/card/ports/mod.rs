//! Port contracts for card lookup.
//!
//! Ports define tracker-agnostic interfaces used by the card services.

pub mod lookup;

pub use lookup::{CardLookup, CardLookupError, CardLookupResult};

#[cfg(test)]
pub use lookup::MockCardLookup;
