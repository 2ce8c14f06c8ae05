//! Trello REST adapter for the card lookup port.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::card::{
    domain::{CardId, TrelloCard, TrelloList},
    ports::{CardLookup, CardLookupError, CardLookupResult},
};
use crate::config::ApiCredentials;

/// Public Trello API root.
pub const DEFAULT_API_BASE: &str = "https://api.trello.com/1/";

/// Request timeout used by [`TrelloHttpClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
enum Resource {
    Card,
    List,
}

impl Resource {
    const fn path(self) -> &'static str {
        match self {
            Self::Card => "cards",
            Self::List => "lists",
        }
    }

    const fn kind(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
        }
    }

    const fn fields(self) -> &'static str {
        match self {
            Self::Card => "name,closed,idList,url",
            Self::List => "name,closed",
        }
    }
}

/// Read-only Trello API client.
#[derive(Debug, Clone)]
pub struct TrelloHttpClient {
    client: reqwest::Client,
    base_url: Url,
    credentials: ApiCredentials,
}

impl TrelloHttpClient {
    /// Creates a client against the public Trello API.
    ///
    /// # Errors
    ///
    /// Returns [`CardLookupError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(credentials: ApiCredentials) -> CardLookupResult<Self> {
        Self::with_options(credentials, DEFAULT_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit API root and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CardLookupError::Transport`] when the base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn with_options(
        credentials: ApiCredentials,
        base_url: &str,
        timeout: Duration,
    ) -> CardLookupResult<Self> {
        let parsed = Url::parse(base_url).map_err(CardLookupError::transport)?;
        if parsed.cannot_be_a_base() {
            return Err(CardLookupError::transport(std::io::Error::other(format!(
                "tracker base URL '{base_url}' cannot carry a path"
            ))));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CardLookupError::transport)?;
        Ok(Self {
            client,
            base_url: parsed,
            credentials,
        })
    }

    /// Builds the request URL for a resource, including credentials.
    fn endpoint(&self, resource: Resource, id: &str) -> CardLookupResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CardLookupError::transport(std::io::Error::other("tracker base URL has no path"))
            })?
            .pop_if_empty()
            .extend([resource.path(), id]);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("fields", resource.fields());
            if let Some(key) = self.credentials.key() {
                query.append_pair("key", key);
            }
            if let Some(token) = self.credentials.token() {
                query.append_pair("token", token);
            }
        }
        Ok(url)
    }

    async fn fetch<T>(&self, resource: Resource, id: &str) -> CardLookupResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(resource, id)?;
        debug!(kind = resource.kind(), id, "requesting tracker object");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(redacted)?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Err(CardLookupError::NotFound {
                kind: resource.kind(),
                id: id.to_owned(),
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CardLookupError::Unauthorized {
                    status: status.as_u16(),
                })
            }
            _ if !status.is_success() => Err(CardLookupError::UnexpectedStatus {
                status: status.as_u16(),
                id: id.to_owned(),
            }),
            _ => response.json::<T>().await.map_err(redacted),
        }
    }
}

/// Request URLs carry the API token, so they never reach error text.
fn redacted(err: reqwest::Error) -> CardLookupError {
    CardLookupError::transport(err.without_url())
}

#[async_trait]
impl CardLookup for TrelloHttpClient {
    async fn get_card(&self, id: &CardId) -> CardLookupResult<TrelloCard> {
        self.fetch(Resource::Card, id.as_str()).await
    }

    async fn get_list(&self, id: &str) -> CardLookupResult<TrelloList> {
        self.fetch(Resource::List, id).await
    }
}
