//! Shared response types for API handlers.
//!
//! JSON endpoints use the `{ "data": ... }` envelope via [`DataResponse`].
//! Card endpoints return [`SvgResponse`], which carries the SVG content
//! type and the configured cache policy whatever the status.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use animecard_core::svg::SvgDocument;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A rendered SVG document plus the headers every card response carries.
#[derive(Debug)]
pub struct SvgResponse {
    pub status: StatusCode,
    pub body: String,
    pub cache_control: String,
}

impl SvgResponse {
    pub fn new(status: StatusCode, document: &SvgDocument, cache_control: String) -> Self {
        Self {
            status,
            body: document.render(),
            cache_control,
        }
    }
}

impl IntoResponse for SvgResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [
                (CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
                (CACHE_CONTROL, self.cache_control),
            ],
            self.body,
        )
            .into_response()
    }
}
