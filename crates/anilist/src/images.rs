//! Poster fetching and base64 inlining.
//!
//! GitHub's image proxy strips external references from SVGs, so every
//! poster is embedded as a `data:` URI. A failed fetch yields an empty
//! string and the card renders without that poster.

use std::collections::HashSet;

use async_trait::async_trait;
use base64::Engine as _;
use futures::future::join_all;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use animecard_core::media::{MediaEntry, PosterMap};

/// Content type assumed when the image server sends none.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Default `User-Agent` sent with poster requests.
pub const DEFAULT_USER_AGENT: &str = "animecard-widget/0.1";

/// Errors from a single poster fetch. Never leaves this module's callers
/// except through logs.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image server returned HTTP {0}")]
    HttpStatus(u16),
}

/// Turns a poster URL into an inlinable data URI.
#[async_trait]
pub trait PosterFetcher: Send + Sync {
    /// `data:<type>;base64,<payload>`, or an empty string on any failure.
    async fn inline(&self, url: &str) -> String;
}

/// [`PosterFetcher`] backed by HTTP GET requests.
#[derive(Debug, Clone)]
pub struct ImageInliner {
    client: reqwest::Client,
    user_agent: String,
}

impl ImageInliner {
    pub fn new(client: reqwest::Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    /// Fetch `url` and encode it as a data URI.
    pub async fn fetch_data_uri(&self, url: &str) -> Result<String, ImageError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await?;

        Ok(encode_data_uri(&content_type, &bytes))
    }
}

#[async_trait]
impl PosterFetcher for ImageInliner {
    async fn inline(&self, url: &str) -> String {
        match self.fetch_data_uri(url).await {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to fetch and encode poster");
                String::new()
            }
        }
    }
}

/// Build `data:<content_type>;base64,<payload>`.
pub fn encode_data_uri(content_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{content_type};base64,{payload}")
}

/// Fetch posters for `entries` concurrently and wait for all of them.
///
/// Each media id is fetched once. Individual failures map to an empty
/// string in the result and never fail the batch.
pub async fn fetch_posters(fetcher: &dyn PosterFetcher, entries: &[&MediaEntry]) -> PosterMap {
    let mut seen = HashSet::new();
    let unique: Vec<&MediaEntry> = entries
        .iter()
        .copied()
        .filter(|e| seen.insert(e.media_id))
        .collect();

    let uris = join_all(unique.iter().map(|e| {
        let url = e.poster_source();
        async move { fetcher.inline(&url).await }
    }))
    .await;

    let failed = uris.iter().filter(|u| u.is_empty()).count();
    tracing::debug!(requested = unique.len(), failed, "Poster batch complete");

    unique
        .iter()
        .map(|e| e.media_id)
        .zip(uris)
        .collect()
}
