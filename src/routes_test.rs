use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn test_app() -> Router {
    app(LeptosOptions::builder().output_name("authgate").build())
}

async fn status_of(path: &str) -> StatusCode {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    test_app().oneshot(request).await.unwrap().status()
}

// =============================================================================
// healthz
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_returns_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

// =============================================================================
// Leptos SSR routes
// =============================================================================

#[tokio::test]
async fn entry_route_renders() {
    assert_eq!(status_of("/").await, StatusCode::OK);
}

#[tokio::test]
async fn dashboard_route_renders() {
    assert_eq!(status_of("/dashboard").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    assert_eq!(status_of("/nope").await, StatusCode::NOT_FOUND);
}
