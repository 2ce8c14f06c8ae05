//! End-of-run Trello card report.
//!
//! [`ReportCollector`] records the cards each test referenced while the
//! session collects tests, and renders the summary printed when
//! `--show-trello-cards` is given.

mod collector;

pub use collector::{REPORT_TITLE, ReportCollector, ReportedCard, TestCards, separator};
