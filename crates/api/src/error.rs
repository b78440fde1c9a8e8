use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use animecard_anilist::AniListError;
use animecard_core::color::Color;
use animecard_core::error::CoreError;
use animecard_core::error_card::{render_error_card, DEFAULT_ERROR_PRIMARY};
use animecard_core::layout::Palette;
use animecard_core::svg::SvgDocument;

/// Message shown to clients for every 500. The cause only goes to the log.
pub const GENERIC_ERROR_MESSAGE: &str = "Could not fetch data.";

/// Background of the generic 500 card, independent of request colors.
const GENERIC_ERROR_BG: &str = "#23272e";

/// Application-level error type for HTTP handlers.
///
/// JSON endpoints get an `{ "error", "code" }` body through
/// [`IntoResponse`]; the card endpoints render the same classification as an
/// SVG via [`AppError::to_card`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested AniList user does not exist.
    #[error("User '{0}' Not Found")]
    UserNotFound(String),

    /// A domain-level error from `animecard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// AniList could not be reached or answered with an error.
    #[error("Upstream error: {0}")]
    Upstream(#[from] AniListError),

    /// The query string could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, machine code and client-facing message.
    ///
    /// 500-class causes are replaced with [`GENERIC_ERROR_MESSAGE`].
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::UserNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                GENERIC_ERROR_MESSAGE.to_string(),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.classify().0
    }

    /// Log the real cause of a 500. Clients only ever see the generic message.
    fn log_if_server_error(&self, status: StatusCode) {
        if status.is_server_error() {
            tracing::error!(error = %self, "AniList request failed");
        }
    }

    /// Render this error as an error card.
    ///
    /// Client errors use the request's background and primary colors. Server
    /// errors always use the fixed generic card.
    pub fn to_card(&self, palette: &Palette) -> SvgDocument {
        let (status, _, message) = self.classify();
        self.log_if_server_error(status);
        if status.is_server_error() {
            return render_error_card(
                &message,
                Some(&Color::normalize(GENERIC_ERROR_BG)),
                Some(&Color::normalize(DEFAULT_ERROR_PRIMARY)),
            );
        }
        render_error_card(&message, Some(&palette.background), Some(&palette.primary))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        self.log_if_server_error(status);

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
