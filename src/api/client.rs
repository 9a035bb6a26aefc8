// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the image search endpoint.

use super::types::{FetchError, SearchPage};
use crate::app::config::ApiConfig;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Parameters shared by every search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
    pub safesearch: bool,
    pub timeout: Duration,
}

impl ClientSettings {
    /// Builds settings from the `[api]` config section.
    ///
    /// `api_key_override` comes from the `--api-key` CLI flag.
    #[must_use]
    pub fn from_config(api: &ApiConfig, api_key_override: Option<&str>) -> Self {
        Self {
            base_url: api.base_url(),
            api_key: api.resolve_api_key(api_key_override),
            per_page: api.per_page(),
            safesearch: api.safesearch(),
            timeout: Duration::from_secs(api.timeout_secs()),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default(), None)
    }
}

/// Issues paginated search requests.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl ImageClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if settings.api_key.is_empty() {
            log::warn!("no API key configured, requests will likely be rejected");
        }

        Ok(Self { http, settings })
    }

    /// Results requested per page.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.settings.per_page
    }

    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// The shared HTTP client, reused for image downloads.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Builds the GET request for one page of `query`.
    pub fn build_request(&self, query: &str, page: u32) -> Result<reqwest::Request, FetchError> {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(7);
        if !self.settings.api_key.is_empty() {
            params.push(("key", self.settings.api_key.clone()));
        }
        params.push(("q", query.to_string()));
        params.push(("page", page.to_string()));
        params.push(("per_page", self.settings.per_page.to_string()));
        params.push(("image_type", "photo".to_string()));
        params.push(("orientation", "horizontal".to_string()));
        params.push(("safesearch", self.settings.safesearch.to_string()));

        self.http
            .get(&self.settings.base_url)
            .query(&params)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))
    }

    /// Fetches one page of results for `query`.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage, FetchError> {
        let request = self.build_request(query, page)?;
        log::debug!("GET {} (page {page})", request.url().path());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_search_page(&body)
    }
}

/// Decodes a search response body.
pub fn parse_search_page(bytes: &[u8]) -> Result<SearchPage, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))
}
