//! GraphQL client for the AniList API.
//!
//! Wraps the three queries the widget needs (user lookup, anime list
//! collection, recent list activity) using [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use animecard_core::media::MediaList;

use crate::models::{
    ActivityData, GraphQlResponse, ListActivity, ListsData, UserData, UserId, UserRecord,
};

/// Public AniList GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://graphql.anilist.co";

/// Upper bound AniList accepts for `perPage`.
pub const MAX_PER_PAGE: u32 = 50;

const USER_QUERY: &str = r#"
query ($name: String) {
  User(name: $name) { id name }
}"#;

const LISTS_QUERY: &str = r#"
query ($userId: Int) {
  MediaListCollection(userId: $userId, type: ANIME) {
    lists {
      name
      entries {
        score
        progress
        status
        media {
          id
          format
          title { romaji english native }
          coverImage { large }
        }
      }
    }
  }
}"#;

const ACTIVITY_QUERY: &str = r#"
query ($userId: Int, $page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    activities(userId: $userId, sort: ID_DESC) {
      ... on ListActivity {
        id
        status
        progress
        createdAt
        media { id title { romaji english native } }
      }
    }
  }
}"#;

/// Errors from the AniList API layer.
#[derive(Debug, thiserror::Error)]
pub enum AniListError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// AniList returned a non-2xx status without a usable GraphQL body.
    #[error("AniList API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The GraphQL layer reported that the requested entity does not exist.
    #[error("AniList entity not found: {0}")]
    NotFound(String),

    /// The GraphQL layer reported one or more errors.
    #[error("AniList GraphQL error: {0}")]
    GraphQl(String),

    /// The response `data` did not match the expected shape.
    #[error("Failed to decode AniList response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Upstream source of users, anime lists and activity.
///
/// Injected into the HTTP layer as a trait object so handlers can be
/// exercised against in-memory fakes.
#[async_trait]
pub trait MediaListSource: Send + Sync {
    /// Look up a user by name. `Ok(None)` when the user does not exist.
    async fn find_user(&self, name: &str) -> Result<Option<UserRecord>, AniListError>;

    /// All named anime lists of a user, in upstream order.
    async fn anime_lists(&self, user_id: UserId) -> Result<Vec<MediaList>, AniListError>;

    /// The user's most recent list activities, newest first.
    async fn recent_activity(
        &self,
        user_id: UserId,
        per_page: u32,
    ) -> Result<Vec<ListActivity>, AniListError>;
}

/// HTTP client for the AniList GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct AniListClient {
    client: reqwest::Client,
    api_url: String,
}

impl AniListClient {
    /// Create a client with a fresh [`reqwest::Client`].
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (shares the connection pool with the poster fetcher).
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    // ---- private helpers ----

    /// POST a GraphQL query and decode its `data` payload.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let Ok(parsed) = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&body) else {
            return Err(AniListError::Api {
                status: status.as_u16(),
                body,
            });
        };

        if !parsed.errors.is_empty() {
            let message = parsed
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            // Errors without their own status inherit the HTTP one.
            let not_found = parsed.errors.iter().any(|e| {
                e.status == Some(404)
                    || (e.status.is_none() && status == reqwest::StatusCode::NOT_FOUND)
            });
            if not_found {
                return Err(AniListError::NotFound(message));
            }
            return Err(AniListError::GraphQl(message));
        }

        if !status.is_success() {
            return Err(AniListError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let data = parsed
            .data
            .ok_or_else(|| AniListError::GraphQl("response carried no data".into()))?;
        Ok(serde_json::from_value(data)?)
    }
}

#[async_trait]
impl MediaListSource for AniListClient {
    async fn find_user(&self, name: &str) -> Result<Option<UserRecord>, AniListError> {
        match self
            .execute::<UserData>(USER_QUERY, json!({ "name": name }))
            .await
        {
            Ok(data) => Ok(data.user),
            Err(AniListError::NotFound(_)) | Err(AniListError::Api { status: 404, .. }) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn anime_lists(&self, user_id: UserId) -> Result<Vec<MediaList>, AniListError> {
        let data: ListsData = self
            .execute(LISTS_QUERY, json!({ "userId": user_id }))
            .await?;

        let lists: Vec<MediaList> = data
            .collection
            .map(|c| c.lists.into_iter().flatten().collect())
            .unwrap_or_default();

        tracing::debug!(user_id, list_count = lists.len(), "Fetched anime lists");
        Ok(lists)
    }

    async fn recent_activity(
        &self,
        user_id: UserId,
        per_page: u32,
    ) -> Result<Vec<ListActivity>, AniListError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let data: ActivityData = self
            .execute(
                ACTIVITY_QUERY,
                json!({ "userId": user_id, "page": 1, "perPage": per_page }),
            )
            .await?;

        let activities = data
            .page
            .map(|p| p.activities)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| serde_json::from_value::<ListActivity>(raw).ok())
            .collect();
        Ok(activities)
    }
}
