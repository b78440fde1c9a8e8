pub mod activity;
pub mod card;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the widget route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                 SVG card (alias of /animelist)
/// /animelist        SVG card
/// /activity         recent list activity (JSON)
/// ```
pub fn widget_routes() -> Router<AppState> {
    Router::new()
        .merge(card::router())
        .merge(activity::router())
}
