//! Sequential test runner.

use super::{RegisteredTest, TestFailure, TestId, TestRegistry, TrelloSession};
use crate::card::ports::CardLookup;
use crate::outcome::{RawOutcome, ReportedOutcome, Verdict};
use crate::report::separator;
use std::any::Any;
use std::collections::HashMap;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tracing::debug;

const SUMMARY_WIDTH: usize = 80;

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every test passed, was skipped, xfailed or xpassed.
    Ok,
    /// At least one test failed.
    TestsFailed,
    /// The command line was invalid.
    UsageError,
    /// No tests were registered.
    NoTestsCollected,
}

impl ExitStatus {
    /// Returns the numeric exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::TestsFailed => 1,
            Self::UsageError => 2,
            Self::NoTestsCollected => 5,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Result of one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    /// The test that ran.
    pub test: TestId,
    /// The raw outcome of the body.
    pub raw: RawOutcome,
    /// The outcome after card remapping.
    pub verdict: Verdict,
    /// Failure message from the body, if it failed.
    pub failure: Option<String>,
}

/// Outcome tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeCounts(HashMap<ReportedOutcome, usize>);

impl OutcomeCounts {
    fn add(&mut self, outcome: ReportedOutcome) {
        *self.0.entry(outcome).or_insert(0) += 1;
    }

    /// Returns how many tests ended with the outcome.
    #[must_use]
    pub fn get(&self, outcome: ReportedOutcome) -> usize {
        self.0.get(&outcome).copied().unwrap_or(0)
    }

    /// Renders `"1 passed, 2 xfailed"` in summary order, omitting zeros.
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<String> = ReportedOutcome::ALL
            .into_iter()
            .filter_map(|outcome| {
                let count = self.get(outcome);
                (count > 0).then(|| format!("{count} {outcome}"))
            })
            .collect();
        if parts.is_empty() {
            "no tests ran".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// Summary of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    reports: Vec<TestReport>,
    counts: OutcomeCounts,
}

impl RunSummary {
    /// Returns per-test reports in execution order.
    #[must_use]
    pub fn reports(&self) -> &[TestReport] {
        &self.reports
    }

    /// Returns the report for a test, if it ran.
    #[must_use]
    pub fn report(&self, test: &str) -> Option<&TestReport> {
        self.reports.iter().find(|report| report.test.as_str() == test)
    }

    /// Returns outcome tallies.
    #[must_use]
    pub const fn counts(&self) -> &OutcomeCounts {
        &self.counts
    }

    /// Returns the exit status for the run.
    #[must_use]
    pub fn exit_status(&self) -> ExitStatus {
        if self.reports.is_empty() {
            ExitStatus::NoTestsCollected
        } else if self.counts.get(ReportedOutcome::Failed) > 0 {
            ExitStatus::TestsFailed
        } else {
            ExitStatus::Ok
        }
    }
}

/// Executes registered tests one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner;

impl Runner {
    /// Creates a runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Collects, runs and summarises every registered test.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the writer.
    pub async fn run<L>(
        &self,
        registry: &TestRegistry,
        session: &mut TrelloSession<L>,
        out: &mut impl Write,
    ) -> io::Result<RunSummary>
    where
        L: CardLookup,
    {
        session.collect(&registry.card_references(), out).await?;

        let mut summary = RunSummary::default();
        for test in registry.iter() {
            let report = run_one(test, session).await;
            write_result_line(out, &report)?;
            summary.counts.add(report.verdict.outcome());
            summary.reports.push(report);
        }

        session.terminal_summary(out)?;
        writeln!(
            out,
            "{}",
            separator(&summary.counts.describe(), SUMMARY_WIDTH)
        )?;
        Ok(summary)
    }
}

async fn run_one<L>(test: &RegisteredTest, session: &TrelloSession<L>) -> TestReport
where
    L: CardLookup,
{
    debug!(test = %test.id(), "running test");
    let body = test.body();
    let failure = match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => None,
        Ok(Err(TestFailure(message))) => Some(message),
        Err(payload) => Some(panic_message(payload.as_ref())),
    };
    let raw = if failure.is_some() {
        RawOutcome::Failed
    } else {
        RawOutcome::Passed
    };
    let verdict = session.verdict(test.cards(), raw).await;
    TestReport {
        test: test.id().clone(),
        raw,
        verdict,
        failure,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "test panicked".to_owned())
}

fn write_result_line(out: &mut impl Write, report: &TestReport) -> io::Result<()> {
    let label = report.verdict.outcome().as_str().to_ascii_uppercase();
    match (report.verdict.reason(), report.failure.as_deref()) {
        (Some(reason), _) => writeln!(out, "{} {label} ({reason})", report.test),
        (None, Some(failure)) => writeln!(out, "{} {label}: {failure}", report.test),
        (None, None) => writeln!(out, "{} {label}", report.test),
    }
}
