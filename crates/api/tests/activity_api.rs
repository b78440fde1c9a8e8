//! Integration tests for `GET /activity`.

mod common;

use axum::http::StatusCode;
use common::{activity, body_json, get, FakePosters, FakeSource};

fn source() -> FakeSource {
    FakeSource::new().with_user("alice", 1, vec![]).with_activity(
        1,
        vec![
            activity(30, 10, "Frieren", 1_700_000_000),
            activity(29, 11, "Mushishi", 1_699_990_000),
            activity(28, 12, "Monster", 1_699_980_000),
        ],
    )
}

// ---------------------------------------------------------------------------
// Test: activities are returned in a data envelope with RFC 3339 timestamps
// ---------------------------------------------------------------------------

#[tokio::test]
async fn returns_recent_activity() {
    let app = common::build_test_app(source(), FakePosters::new());

    let response = get(app, "/activity?username=alice").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["id"], 30);
    assert_eq!(data[0]["media_id"], 10);
    assert_eq!(data[0]["title"], "Frieren");
    assert_eq!(data[0]["status"], "watched episode");
    assert_eq!(data[0]["progress"], "3");
    assert_eq!(data[0]["created_at"], "2023-11-14T22:13:20Z");
}

// ---------------------------------------------------------------------------
// Test: perPage limits the number of items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn per_page_limits_items() {
    let app = common::build_test_app(source(), FakePosters::new());

    let response = get(app, "/activity?username=alice&perPage=2").await;

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: unknown user returns a 404 JSON error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_user_returns_404_json() {
    let app = common::build_test_app(source(), FakePosters::new());

    let response = get(app, "/activity?username=ghost").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "User 'ghost' Not Found");
}

// ---------------------------------------------------------------------------
// Test: an unparseable query string returns a 400 JSON error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_query_key_returns_400_json() {
    let app = common::build_test_app(source(), FakePosters::new());

    let response = get(app, "/activity?username=alice&username=bob").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("username"));
}
