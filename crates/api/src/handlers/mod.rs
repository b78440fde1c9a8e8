pub mod activity;
pub mod card;

use animecard_anilist::models::UserRecord;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Look up `username` upstream, mapping an absent user to a 404.
pub(crate) async fn resolve_user(state: &AppState, username: &str) -> AppResult<UserRecord> {
    state
        .source
        .find_user(username)
        .await?
        .ok_or_else(|| AppError::UserNotFound(username.to_string()))
}
