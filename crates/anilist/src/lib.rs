//! AniList GraphQL client and poster inlining.
//!
//! [`MediaListSource`] is the seam the HTTP layer depends on; the production
//! implementation is [`client::AniListClient`]. Posters are fetched through
//! [`images::PosterFetcher`] and inlined as base64 data URIs so the rendered
//! SVG is self-contained.

pub mod client;
pub mod images;
pub mod models;

pub use client::{AniListClient, AniListError, MediaListSource};
pub use images::{fetch_posters, ImageInliner, PosterFetcher};
