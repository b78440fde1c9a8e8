//! Handlers for the SVG card endpoints.
//!
//! Every outcome is an SVG: the rendered card on success, an error card
//! otherwise. Status codes still reflect the outcome.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use animecard_anilist::fetch_posters;
use animecard_core::categorize::{categorize, CategorizeOptions};
use animecard_core::layout::{self, LayoutConfig, Palette};
use animecard_core::svg::SvgDocument;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_user;
use crate::query::CardQuery;
use crate::response::SvgResponse;
use crate::state::AppState;

/// GET /animelist (also served at GET /)
///
/// Renders the user's Watching, Completed and Planning lists as an SVG card
/// in the requested layout.
pub async fn get_card(
    State(state): State<AppState>,
    query: Result<Query<CardQuery>, QueryRejection>,
) -> SvgResponse {
    let cache_control = state.config.cache_control();

    // An unparseable query has no usable colors either.
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            let err = AppError::BadRequest(rejection.body_text());
            tracing::debug!(error = %err, "Rejected card query");
            return SvgResponse::new(
                err.status(),
                &err.to_card(&Palette::default()),
                cache_control,
            );
        }
    };

    let username = query.username(&state.config.default_username);
    let config = query.layout_config(&username);

    match build_card(&state, &username, &config).await {
        Ok(document) => SvgResponse::new(StatusCode::OK, &document, cache_control),
        Err(err) => {
            let status = err.status();
            tracing::debug!(%username, %status, error = %err, "Rendering error card");
            SvgResponse::new(status, &err.to_card(&config.palette), cache_control)
        }
    }
}

/// Fetch, categorize and lay out one user's lists.
///
/// Posters are fetched only for the entries the layout will show, after
/// both upstream lookups have completed.
pub async fn build_card(
    state: &AppState,
    username: &str,
    config: &LayoutConfig,
) -> AppResult<SvgDocument> {
    config.validate()?;

    let user = resolve_user(state, username).await?;
    let lists = state.source.anime_lists(user.id).await?;

    let categorized = categorize(
        &lists,
        CategorizeOptions {
            require_poster: state.config.require_poster,
        },
    );
    let visible = config.visible_entries(&categorized);
    let posters = fetch_posters(state.posters.as_ref(), &visible).await;

    let document = layout::render(&categorized, &posters, config)?;

    tracing::info!(
        user_id = user.id,
        mode = ?config.mode,
        entries = visible.len(),
        posters = posters.len(),
        "Rendered card"
    );
    Ok(document)
}
