//! Response shapes for the AniList GraphQL queries used by the widget.
//!
//! List entries reuse [`animecard_core::media::MediaList`] so the
//! categorizer consumes upstream data without conversion.

use animecard_core::media::{MediaId, MediaList, MediaTitle};
use serde::{Deserialize, Serialize};

/// AniList user identifier.
pub type UserId = i64;

/// Minimal user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
}

/// Media reference inside an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMedia {
    pub id: MediaId,
    #[serde(default)]
    pub title: MediaTitle,
}

/// A list update ("watched episode 3 of ...", "completed ...").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActivity {
    pub id: i64,
    pub status: Option<String>,
    /// Episode or episode range, e.g. `"3"` or `"4 - 6"`.
    pub progress: Option<String>,
    /// Unix timestamp in seconds.
    pub created_at: i64,
    pub media: Option<ActivityMedia>,
}

// ---------------------------------------------------------------------------
// GraphQL envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    pub status: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserData {
    #[serde(rename = "User")]
    pub user: Option<UserRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaListCollection {
    #[serde(default)]
    pub lists: Vec<Option<MediaList>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListsData {
    #[serde(rename = "MediaListCollection")]
    pub collection: Option<MediaListCollection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActivityPage {
    /// Union members other than `ListActivity` come back as `{}`.
    #[serde(default)]
    pub activities: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActivityData {
    #[serde(rename = "Page")]
    pub page: Option<ActivityPage>,
}
