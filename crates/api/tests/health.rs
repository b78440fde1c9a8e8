//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, FakePosters, FakeSource};
use tower::ServiceExt;

fn app() -> axum::Router {
    common::build_test_app(FakeSource::new(), FakePosters::new())
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // MakeRequestUuid produces a hyphenated UUID.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: any origin may fetch a card
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/health")
        .header("Origin", "https://github.com")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
