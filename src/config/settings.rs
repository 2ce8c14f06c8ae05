//! Immutable run settings.

use super::{
    ConfigFileError, DEFAULT_CONFIG_FILE, TrelloFileSection, TrelloOptions, load_config_file,
};
use crate::card::domain::CompletedLists;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use tracing::{debug, warn};

/// Trello API key and token. Blank values are treated as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    key: Option<String>,
    token: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

impl ApiCredentials {
    /// Creates credentials, discarding blank values.
    #[must_use]
    pub fn new(key: Option<String>, token: Option<String>) -> Self {
        Self {
            key: non_blank(key),
            token: non_blank(token),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the API token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns `true` when both key and token are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.key.is_some() && self.token.is_some()
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key", &self.key)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    credentials: ApiCredentials,
    completed_lists: CompletedLists,
    config_path: Utf8PathBuf,
    show_cards: bool,
}

impl Settings {
    /// Builds settings from command-line options and the config file they
    /// name.
    ///
    /// A missing or malformed config file is logged and ignored; the run
    /// continues with command-line values only.
    #[must_use]
    pub fn load(options: &TrelloOptions) -> Self {
        let file = match load_config_file(&options.config_file) {
            Ok(section) => {
                debug!(path = %options.config_file, "loaded trello configuration");
                section
            }
            Err(err) => {
                report_config_error(&options.config_file, &err);
                TrelloFileSection::default()
            }
        };
        Self::merge(options, file)
    }

    /// Merges command-line options over config file values.
    ///
    /// Key and token given on the command line win. A non-empty
    /// `--trello-completed` list replaces the file's list entirely.
    #[must_use]
    pub fn merge(options: &TrelloOptions, file: TrelloFileSection) -> Self {
        let credentials = ApiCredentials::new(
            non_blank(options.api_key.clone()).or(file.key),
            non_blank(options.api_token.clone()).or(file.token),
        );
        let completed = if options.completed.is_empty() {
            file.completed
        } else {
            options.completed.clone()
        };
        Self {
            credentials,
            completed_lists: CompletedLists::new(completed),
            config_path: options.config_file.clone(),
            show_cards: options.show_cards,
        }
    }

    /// Returns the tracker credentials.
    #[must_use]
    pub const fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// Returns the list names treated as completed.
    #[must_use]
    pub const fn completed_lists(&self) -> &CompletedLists {
        &self.completed_lists
    }

    /// Returns the config file path that was consulted.
    #[must_use]
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }

    /// Returns whether the end-of-run card report is enabled.
    #[must_use]
    pub const fn show_cards(&self) -> bool {
        self.show_cards
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::merge(&TrelloOptions::default(), TrelloFileSection::default())
    }
}

fn report_config_error(path: &Utf8Path, err: &ConfigFileError) {
    // Only an explicitly named file is expected to exist.
    if matches!(err, ConfigFileError::NotFound(_)) && path.as_str() == DEFAULT_CONFIG_FILE {
        debug!(%path, "no default trello configuration file");
    } else {
        warn!(%path, error = %err, "ignoring trello configuration file");
    }
}
