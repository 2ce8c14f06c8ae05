//! YAML config file loading.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::Deserialize;
use std::io;
use thiserror::Error;

/// The `trello:` section of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrelloFileSection {
    /// Trello API key.
    #[serde(default)]
    pub key: Option<String>,
    /// Trello API token.
    #[serde(default)]
    pub token: Option<String>,
    /// List names treated as completed.
    #[serde(default)]
    pub completed: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    trello: Option<TrelloFileSection>,
}

/// Errors raised while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// No file exists at the path.
    #[error("no trello configuration file found matching: {0}")]
    NotFound(Utf8PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read trello configuration {path}: {source}")]
    Read {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is empty.
    #[error("trello configuration file {0} is empty")]
    Empty(Utf8PathBuf),

    /// The file is not valid YAML for the expected layout.
    #[error("failed to parse trello configuration {path}: {source}")]
    Parse {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The document has no `trello:` section.
    #[error("trello configuration file {0} has no 'trello' section")]
    MissingSection(Utf8PathBuf),
}

/// Reads and parses the `trello:` section of a YAML config file.
///
/// # Errors
///
/// Returns [`ConfigFileError`] when the file is missing, unreadable, empty,
/// malformed, or lacks the `trello` section.
pub fn load_config_file(path: &Utf8Path) -> Result<TrelloFileSection, ConfigFileError> {
    let contents = read_file(path)?;
    parse_config(path, &contents)
}

fn read_file(path: &Utf8Path) -> Result<String, ConfigFileError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigFileError::NotFound(path.to_owned()))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let classify = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigFileError::NotFound(path.to_owned())
        } else {
            ConfigFileError::Read {
                path: path.to_owned(),
                source,
            }
        }
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(classify)?;
    dir.read_to_string(file_name).map_err(classify)
}

fn parse_config(path: &Utf8Path, contents: &str) -> Result<TrelloFileSection, ConfigFileError> {
    if contents.trim().is_empty() {
        return Err(ConfigFileError::Empty(path.to_owned()));
    }
    let document: ConfigDocument =
        serde_yaml::from_str(contents).map_err(|source| ConfigFileError::Parse {
            path: path.to_owned(),
            source,
        })?;
    document
        .trello
        .ok_or_else(|| ConfigFileError::MissingSection(path.to_owned()))
}
