//! Outcome remapping.
//!
//! A test's raw pass/fail result is reclassified from the status of the
//! cards attached to it. [`decide`] holds the decision table;
//! [`OutcomeRemapper`] resolves the cards first and then applies it.

mod domain;
mod remapper;

pub use domain::{EvaluatedCard, ParseOutcomeError, RawOutcome, ReportedOutcome, Verdict};
pub use remapper::{OutcomeRemapper, decide};
