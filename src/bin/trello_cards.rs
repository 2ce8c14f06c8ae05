//! Resolves Trello cards from the command line.
//!
//! Usage:
//!
//! ```text
//! trello-cards [--trello-cfg <TRELLO_CFG>] [--trello-api-key <KEY>]
//!              [--trello-api-token <TOKEN>] [--trello-completed <LIST>]...
//!              [--trello-api-url <URL>] [--show-trello-cards] [--markers]
//!              [CARD]...
//! ```
//!
//! Each card is printed with its list and whether that list counts as
//! completed. Exit codes follow the harness: `0` when cards were checked,
//! `1` when the run itself failed, `2` for usage errors, `5` when no card
//! was given.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use trello_gate::card::{
    adapters::{
        TrelloHttpClient,
        http::{DEFAULT_API_BASE, DEFAULT_TIMEOUT},
    },
    domain::{CardDomainError, CardRef, CardResolution, TrelloMarker},
    services::CardStatusResolver,
};
use trello_gate::config::{Settings, TrelloOptions};
use trello_gate::harness::ExitStatus;
use trello_gate::logging;
use trello_gate::outcome::{EvaluatedCard, OutcomeRemapper};
use trello_gate::report::ReportCollector;
use tracing::warn;

/// Boxed error type for the run result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Name recorded for command-line cards in the card report.
const REPORT_SOURCE: &str = "trello-cards";

#[derive(Debug, Parser)]
#[command(
    name = "trello-cards",
    version,
    about = "Check the Trello cards referenced by tests"
)]
struct Cli {
    /// Show the test marker this integration registers and exit
    #[arg(long)]
    markers: bool,

    /// Trello API root to query
    #[arg(long = "trello-api-url", value_name = "URL", default_value = DEFAULT_API_BASE)]
    api_url: String,

    /// Card URLs or identifiers to resolve
    #[arg(value_name = "CARD", value_parser = parse_card)]
    cards: Vec<CardRef>,

    #[command(flatten)]
    trello: TrelloOptions,
}

fn parse_card(value: &str) -> Result<CardRef, CardDomainError> {
    CardRef::parse(value)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init() {
        report_failure(&err);
        return ExitCode::FAILURE;
    }
    match run(cli).await {
        Ok(status) => status.into(),
        Err(err) => {
            tracing::error!(error = %err, "trello-cards failed");
            report_failure(err.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn report_failure(err: &dyn std::error::Error) {
    // Nothing is left to report to if stderr itself is closed.
    drop(writeln!(io::stderr(), "trello-cards: {err}"));
}

async fn run(cli: Cli) -> Result<ExitStatus, BoxError> {
    let mut stdout = io::stdout();

    if cli.markers {
        writeln!(stdout, "{}", TrelloMarker::DESCRIPTION)?;
        return Ok(ExitStatus::Ok);
    }

    let settings = Settings::load(&cli.trello);
    let mut collector = ReportCollector::new();
    if cli.cards.is_empty() {
        if settings.show_cards() {
            collector.render(&mut stdout)?;
        }
        return Ok(ExitStatus::NoTestsCollected);
    }

    if !settings.credentials().is_complete() {
        warn!("trello API key or token missing; card lookups will likely be rejected");
    }
    let client = TrelloHttpClient::with_options(
        settings.credentials().clone(),
        &cli.api_url,
        DEFAULT_TIMEOUT,
    )?;
    let resolver = CardStatusResolver::new(Arc::new(client), settings.completed_lists().clone());
    let evaluated = OutcomeRemapper::new(Arc::new(resolver))
        .evaluate(&cli.cards)
        .await;

    for card in &evaluated {
        write_status(&mut stdout, card)?;
    }
    if settings.show_cards() {
        collector.record(REPORT_SOURCE, &evaluated);
        collector.render(&mut stdout)?;
    }
    Ok(ExitStatus::Ok)
}

fn write_status(out: &mut impl Write, card: &EvaluatedCard) -> io::Result<()> {
    let url = card.reference().url();
    match card.resolution() {
        CardResolution::Resolved(status) => {
            let state = if status.is_completed() {
                "completed"
            } else {
                "open"
            };
            writeln!(out, "{url} [{}] {state}", status.list_name())
        }
        CardResolution::Unresolved { reason } => writeln!(out, "{url} unresolved ({reason})"),
    }
}
