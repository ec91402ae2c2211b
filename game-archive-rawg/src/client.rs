use reqwest::blocking::Client;

use game_archive_lib::{MetadataProvider, ProviderError, ProviderRecord};

use crate::credentials::Credentials;
use crate::error::RawgError;
use crate::types::{RawgGame, SearchResponse};

/// Blocking HTTP client for the RAWG API.
pub struct RawgClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RawgClient {
    /// Build a client. Every request is bounded by `creds.timeout`.
    pub fn new(creds: &Credentials) -> Result<Self, RawgError> {
        let api_key = creds.require_key()?.to_string();
        let http = Client::builder()
            .timeout(creds.timeout)
            .user_agent(concat!("game-archive/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: creds.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Hit the API root to confirm the key is accepted.
    pub fn check_connection(&self) -> Result<(), RawgError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RawgError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Search by title and return the best match, if any.
    pub fn search_game(&self, title: &str) -> Result<Option<RawgGame>, RawgError> {
        let resp = self
            .http
            .get(format!("{}/games", self.base_url))
            .query(&[("search", title), ("key", self.api_key.as_str())])
            .send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(RawgError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp.text()?;
        let response: SearchResponse = serde_json::from_str(&text)?;
        Ok(response.best_match())
    }
}

impl MetadataProvider for RawgClient {
    fn search_by_title(&self, title: &str) -> Result<Option<ProviderRecord>, ProviderError> {
        self.search_game(title)
            .map(|game| game.map(ProviderRecord::from))
            .map_err(ProviderError::from)
    }
}

/// Connect to RAWG if it is enabled.
///
/// Returns `Ok(None)` when enrichment is switched off. A missing key or a
/// failed connectivity probe is returned as an error for the caller to
/// report.
pub fn connect(creds: &Credentials) -> Result<Option<RawgClient>, RawgError> {
    if !creds.enabled {
        log::info!("RAWG not enabled.");
        log::info!("Set RAWG_ENABLED and RAWG_API_KEY (or the [rawg] config table) to enable it.");
        return Ok(None);
    }
    let client = RawgClient::new(creds)?;
    client.check_connection()?;
    log::info!("Connected to RAWG API at {}", client.base_url);
    Ok(Some(client))
}
