use std::sync::Arc;

use animecard_anilist::{MediaListSource, PosterFetcher};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream users, lists and activity (AniList in production).
    pub source: Arc<dyn MediaListSource>,
    /// Poster download and inlining.
    pub posters: Arc<dyn PosterFetcher>,
}
