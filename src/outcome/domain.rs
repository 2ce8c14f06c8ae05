//! Outcome value types.

use crate::card::domain::{CardRef, CardResolution};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result of executing a test body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawOutcome {
    /// The body returned successfully.
    Passed,
    /// The body returned an error or panicked.
    Failed,
}

/// Outcome reported for a test after card status has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportedOutcome {
    /// Plain pass.
    Passed,
    /// Plain failure; fails the run.
    Failed,
    /// Skipped because an open card asked for it.
    Skipped,
    /// Failed while an attached card is still open.
    XFailed,
    /// Passed while an attached card is still open.
    XPassed,
}

impl ReportedOutcome {
    /// All outcomes in summary order.
    pub const ALL: [Self; 5] = [
        Self::Passed,
        Self::Failed,
        Self::Skipped,
        Self::XFailed,
        Self::XPassed,
    ];

    /// Returns the outcome's summary label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::XFailed => "xfailed",
            Self::XPassed => "xpassed",
        }
    }

    /// Returns whether the outcome fails the run.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl From<RawOutcome> for ReportedOutcome {
    fn from(raw: RawOutcome) -> Self {
        match raw {
            RawOutcome::Passed => Self::Passed,
            RawOutcome::Failed => Self::Failed,
        }
    }
}

impl fmt::Display for ReportedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown outcome label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown test outcome: {0}")]
pub struct ParseOutcomeError(pub String);

impl FromStr for ReportedOutcome {
    type Err = ParseOutcomeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.as_str() == normalized)
            .ok_or_else(|| ParseOutcomeError(value.to_owned()))
    }
}

/// A card reference paired with its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedCard {
    reference: CardRef,
    resolution: CardResolution,
}

impl EvaluatedCard {
    /// Pairs a reference with its resolution.
    #[must_use]
    pub const fn new(reference: CardRef, resolution: CardResolution) -> Self {
        Self {
            reference,
            resolution,
        }
    }

    /// Returns the card reference.
    #[must_use]
    pub const fn reference(&self) -> &CardRef {
        &self.reference
    }

    /// Returns the resolution.
    #[must_use]
    pub const fn resolution(&self) -> &CardResolution {
        &self.resolution
    }

    /// Returns `true` when the card resolved and is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.resolution.is_open()
    }
}

/// Final outcome of a test, with the reason it was remapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    outcome: ReportedOutcome,
    reason: Option<String>,
}

impl Verdict {
    /// A verdict that keeps the raw outcome.
    #[must_use]
    pub fn unchanged(raw: RawOutcome) -> Self {
        Self {
            outcome: raw.into(),
            reason: None,
        }
    }

    /// A remapped verdict.
    #[must_use]
    pub const fn remapped(outcome: ReportedOutcome, reason: String) -> Self {
        Self {
            outcome,
            reason: Some(reason),
        }
    }

    /// Returns the reported outcome.
    #[must_use]
    pub const fn outcome(&self) -> ReportedOutcome {
        self.outcome
    }

    /// Returns why the outcome was remapped, if it was.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
