//! Run configuration.
//!
//! Settings come from two sources: command-line options ([`TrelloOptions`])
//! and an optional YAML file named by `--trello-cfg`. [`Settings::load`]
//! merges them once at startup; the resulting value is immutable and passed
//! explicitly to everything that needs it.

mod file;
mod options;
mod settings;

pub use file::{ConfigFileError, TrelloFileSection, load_config_file};
pub use options::{DEFAULT_CONFIG_FILE, TrelloOptions};
pub use settings::{ApiCredentials, Settings};

#[cfg(test)]
mod tests;
