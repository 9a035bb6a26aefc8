// SPDX-License-Identifier: MPL-2.0
//! Downloading of thumbnails and full-size images.

use super::image::{decode, ImageData};
use crate::error::{Error, Result};

/// Load state of a remote image.
#[derive(Debug, Clone)]
pub enum RemoteImage {
    Loading,
    Ready(ImageData),
    /// Download or decoding failed; holds the error text.
    Failed(String),
}

impl RemoteImage {
    #[must_use]
    pub fn from_result(result: Result<ImageData>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Downloads `url` and decodes it off the async runtime's worker threads.
///
/// # Errors
///
/// [`Error::Network`] for transport failures and non-success statuses,
/// [`Error::Decode`] when the body is not a supported image.
pub async fn fetch_image(http: reqwest::Client, url: String) -> Result<ImageData> {
    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;
    log::debug!("downloaded {} bytes from {url}", bytes.len());

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_keeps_error_text() {
        let state = RemoteImage::from_result(Err(Error::Network("HTTP status: 404".into())));
        match state {
            RemoteImage::Failed(message) => assert!(message.contains("404")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn only_loading_reports_loading() {
        assert!(RemoteImage::Loading.is_loading());
        assert!(!RemoteImage::Failed(String::new()).is_loading());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let result = fetch_image(reqwest::Client::new(), format!("http://{addr}/a.jpg")).await;

        assert!(matches!(result, Err(Error::Network(_))));
    }
}
