#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use animecard_anilist::models::{ActivityMedia, ListActivity, UserId, UserRecord};
use animecard_anilist::{AniListError, MediaListSource, PosterFetcher};
use animecard_api::config::ServerConfig;
use animecard_api::router::build_app_router;
use animecard_api::state::AppState;
use animecard_core::media::{CoverImage, ListEntry, Media, MediaList, MediaTitle};

/// Poster payload served by [`FakePosters`] for every healthy URL.
pub const FAKE_POSTER: &str = "data:image/png;base64,QUJD";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        cache_max_age_secs: 7200,
        default_username: "kenndeclouv".to_string(),
        anilist_api_url: "http://127.0.0.1:9/".to_string(),
        http_client_timeout_secs: 5,
        poster_user_agent: "animecard-test/0.0".to_string(),
        require_poster: false,
    }
}

/// Build the full application router over in-memory fakes.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app(source: FakeSource, posters: Arc<FakePosters>) -> Router {
    build_test_app_with_config(test_config(), source, posters)
}

pub fn build_test_app_with_config(
    config: ServerConfig,
    source: FakeSource,
    posters: Arc<FakePosters>,
) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        source: Arc::new(source),
        posters,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A list entry for media `id`. A `cover` containing `broken` makes
/// [`FakePosters`] fail for it.
pub fn entry(id: i64, title: &str, cover: Option<&str>, score: f64, progress: i64) -> ListEntry {
    ListEntry {
        media: Some(Media {
            id: Some(id),
            title: MediaTitle {
                romaji: Some(title.to_string()),
                english: None,
                native: None,
            },
            cover_image: cover.map(|url| CoverImage {
                large: Some(url.to_string()),
            }),
            format: Some("TV".to_string()),
        }),
        score: Some(score),
        progress: Some(progress),
        status: None,
    }
}

pub fn list(name: &str, entries: Vec<ListEntry>) -> MediaList {
    MediaList {
        name: name.to_string(),
        entries,
    }
}

pub fn activity(id: i64, media_id: i64, title: &str, created_at: i64) -> ListActivity {
    ListActivity {
        id,
        status: Some("watched episode".to_string()),
        progress: Some("3".to_string()),
        created_at,
        media: Some(ActivityMedia {
            id: media_id,
            title: MediaTitle {
                romaji: Some(title.to_string()),
                english: None,
                native: None,
            },
        }),
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// In-memory [`MediaListSource`].
#[derive(Default)]
pub struct FakeSource {
    users: HashMap<String, UserRecord>,
    lists: HashMap<UserId, Vec<MediaList>>,
    activity: HashMap<UserId, Vec<ListActivity>>,
    lists_failure: Option<String>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, name: &str, id: UserId, lists: Vec<MediaList>) -> Self {
        self.users.insert(
            name.to_string(),
            UserRecord {
                id,
                name: name.to_string(),
            },
        );
        self.lists.insert(id, lists);
        self
    }

    pub fn with_activity(mut self, user_id: UserId, activity: Vec<ListActivity>) -> Self {
        self.activity.insert(user_id, activity);
        self
    }

    /// Make every `anime_lists` call fail with `message`.
    pub fn failing_lists(mut self, message: &str) -> Self {
        self.lists_failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl MediaListSource for FakeSource {
    async fn find_user(&self, name: &str) -> Result<Option<UserRecord>, AniListError> {
        Ok(self.users.get(name).cloned())
    }

    async fn anime_lists(&self, user_id: UserId) -> Result<Vec<MediaList>, AniListError> {
        if let Some(message) = &self.lists_failure {
            return Err(AniListError::GraphQl(message.clone()));
        }
        Ok(self.lists.get(&user_id).cloned().unwrap_or_default())
    }

    async fn recent_activity(
        &self,
        user_id: UserId,
        per_page: u32,
    ) -> Result<Vec<ListActivity>, AniListError> {
        Ok(self
            .activity
            .get(&user_id)
            .map(|items| items.iter().take(per_page as usize).cloned().collect())
            .unwrap_or_default())
    }
}

/// [`PosterFetcher`] that records requested URLs and fails for any URL
/// containing `broken`.
#[derive(Default)]
pub struct FakePosters {
    calls: AtomicUsize,
}

impl FakePosters {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PosterFetcher for FakePosters {
    async fn inline(&self, url: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.contains("broken") {
            String::new()
        } else {
            FAKE_POSTER.to_string()
        }
    }
}
