mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use slugshort::domain::repositories::UrlStore;
use slugshort::infrastructure::store::MemoryStore;
use slugshort::routes::app_router;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_healthy() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store, None);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "healthy", "storage": "memory" }));
}

#[tokio::test]
async fn test_health_degraded() {
    let store = Arc::new(MemoryStore::new());
    store.close().await.unwrap();
    let server = common::create_test_server(store, None);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let store = Arc::new(MemoryStore::new());
    let app = app_router(
        common::create_test_state(store, None),
        common::CORS_ORIGIN,
    )
    .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store, None);

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/urls")
        .add_header("Origin", common::CORS_ORIGIN)
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::CORS_ORIGIN
    );
}
