//! Logging bootstrap for binaries embedding the integration.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TRELLO_GATE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Error returned when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install log subscriber: {0}")]
pub struct LoggingInitError(String);

/// Installs a stderr `fmt` subscriber filtered by [`LOG_ENV`].
///
/// Output goes to stderr so reports written to stdout stay parseable.
///
/// # Errors
///
/// Returns [`LoggingInitError`] when a global subscriber already exists.
pub fn init() -> Result<(), LoggingInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingInitError(err.to_string()))
}
