//! Handler for the recent activity feed.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use animecard_anilist::models::ListActivity;
use animecard_core::media::MediaId;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_user;
use crate::query::ActivityQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// One list update as returned by `GET /activity`.
#[derive(Debug, Serialize)]
pub struct ActivityItem {
    pub id: i64,
    pub status: Option<String>,
    pub progress: Option<String>,
    pub media_id: Option<MediaId>,
    pub title: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ListActivity> for ActivityItem {
    fn from(activity: ListActivity) -> Self {
        let (media_id, title) = match activity.media {
            Some(media) => (Some(media.id), Some(media.title.preferred().to_string())),
            None => (None, None),
        };
        Self {
            id: activity.id,
            status: activity.status,
            progress: activity.progress,
            media_id,
            title,
            created_at: DateTime::from_timestamp(activity.created_at, 0),
        }
    }
}

/// GET /activity?username=&perPage=
pub async fn list_recent_activity(
    State(state): State<AppState>,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<ActivityItem>>>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let username = query.username(&state.config.default_username);
    let user = resolve_user(&state, &username).await?;

    let activities = state
        .source
        .recent_activity(user.id, query.per_page())
        .await?;

    Ok(Json(DataResponse {
        data: activities.into_iter().map(ActivityItem::from).collect(),
    }))
}
