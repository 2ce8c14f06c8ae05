//! Test harness integration.
//!
//! The harness is the host side of the integration: tests are registered
//! with their card markers up front ([`TestRegistry`]), a [`TrelloSession`]
//! resolves every referenced card during collection, and the [`Runner`]
//! executes the bodies sequentially, remapping each raw outcome through the
//! session before tallying it.
//!
//! ```no_run
//! use std::sync::Arc;
//! use trello_gate::card::adapters::InMemoryCardLookup;
//! use trello_gate::card::domain::TrelloMarker;
//! use trello_gate::config::Settings;
//! use trello_gate::harness::{Runner, TestRegistry, TrelloSession};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = TestRegistry::new();
//! registry.register(
//!     "suite::login_redirects",
//!     TrelloMarker::cards(["https://trello.com/c/open1234"])?,
//!     || Err("redirect loop".into()),
//! )?;
//!
//! let mut session = TrelloSession::new(Settings::default(), Arc::new(InMemoryCardLookup::new()));
//! let summary = Runner::new().run(&registry, &mut session, &mut std::io::stdout()).await?;
//! std::process::exit(i32::from(summary.exit_status().code()));
//! # }
//! ```

mod registry;
mod runner;
mod session;

pub use registry::{HarnessError, RegisteredTest, TestBody, TestFailure, TestId, TestRegistry};
pub use runner::{ExitStatus, OutcomeCounts, RunSummary, Runner, TestReport};
pub use session::TrelloSession;

#[cfg(test)]
mod tests;
