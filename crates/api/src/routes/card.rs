use axum::routing::get;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// Mount the SVG card at `/` and `/animelist`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(card::get_card))
        .route("/animelist", get(card::get_card))
}
