// SPDX-License-Identifier: MPL-2.0
//! Wire types returned by the search endpoint.

use serde::Deserialize;
use std::fmt;

/// One raw result record as returned by the endpoint.
///
/// Only the fields the gallery projects are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawHit {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
}

/// A single page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    /// Number of matches the endpoint will actually serve for this query.
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    pub hits: Vec<RawHit>,
}

/// Errors produced by the image fetch client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    Network(String),
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Parse(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
