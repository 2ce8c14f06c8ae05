//! Trello card lookup and status resolution.
//!
//! Tests reference Trello cards by URL; this module turns those URLs into
//! validated card references, fetches the card and its containing list
//! through the [`ports::CardLookup`] port and classifies the card as open or
//! completed. The module follows the same split as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
