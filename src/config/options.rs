//! Command-line options contributed by the Trello integration.

use camino::Utf8PathBuf;
use clap::Args;

/// Config file consulted when `--trello-cfg` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "trello.yml";

/// Trello options, designed to be flattened into a host command line.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[command(next_help_heading = "trello")]
pub struct TrelloOptions {
    /// Trello configuration file
    #[arg(long = "trello-cfg", value_name = "TRELLO_CFG", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: Utf8PathBuf,

    /// Trello API key (defaults to the value in the config file)
    #[arg(long = "trello-api-key", value_name = "TRELLO_API_KEY")]
    pub api_key: Option<String>,

    /// Trello API token (defaults to the value in the config file)
    #[arg(long = "trello-api-token", value_name = "TRELLO_API_TOKEN")]
    pub api_token: Option<String>,

    /// Any cards in TRELLO_COMPLETED will be considered complete (repeatable)
    #[arg(long = "trello-completed", value_name = "TRELLO_COMPLETED")]
    pub completed: Vec<String>,

    /// Show a report of all trello cards referenced by tests
    #[arg(long = "show-trello-cards")]
    pub show_cards: bool,
}

impl Default for TrelloOptions {
    fn default() -> Self {
        Self {
            config_file: Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
            api_key: None,
            api_token: None,
            completed: Vec::new(),
            show_cards: false,
        }
    }
}
