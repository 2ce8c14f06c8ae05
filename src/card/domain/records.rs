//! Tracker records as returned by the Trello REST API.

use serde::{Deserialize, Serialize};

/// Card record. Only the fields the resolver needs are kept; unknown
/// payload fields are ignored on deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloCard {
    /// Trello object identifier.
    pub id: String,
    /// Card title.
    pub name: String,
    /// Whether the card has been archived.
    #[serde(default)]
    pub closed: bool,
    /// Identifier of the list containing the card.
    pub id_list: String,
    /// Canonical card URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// List record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    /// Trello object identifier.
    pub id: String,
    /// List name, matched against the completed-list set.
    pub name: String,
    /// Whether the list has been archived.
    #[serde(default)]
    pub closed: bool,
}
