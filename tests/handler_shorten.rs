mod common;

use axum::body::Bytes;
use serde_json::{Value, json};
use slugshort::domain::repositories::UrlStore;
use slugshort::infrastructure::store::MemoryStore;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_hash_based() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store.clone(), None);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "original_url": "https://example.com",
            "short_code": "4KjP4hmE2uW",
            "short_url": "http://localhost:8080/4KjP4hmE2uW",
            "slug_type": "hash_based"
        })
    );

    assert_eq!(
        store.get("4KjP4hmE2uW").await.unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn test_shorten_adds_missing_scheme() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store, None);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "example.com" }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["original_url"], "https://example.com");
    assert_eq!(body["short_code"], "4KjP4hmE2uW");
}

#[tokio::test]
async fn test_shorten_generator_slug() {
    let store = Arc::new(MemoryStore::new());
    let generator = common::ScriptedGenerator::returning("ghub");
    let server = common::create_test_server(store, Some(generator.clone()));

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "https://github.com" }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["short_code"], "ghub");
    assert_eq!(body["short_url"], "http://localhost:8080/ghub");
    assert_eq!(body["slug_type"], "generator_derived");
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store.clone(), None);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid URL");
    assert_eq!(body["details"]["reason"], "URL must have a valid domain");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_rejects_other_protocols() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store.clone(), None);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "ftp://example.com" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let store = Arc::new(MemoryStore::new());
    let generator = common::ScriptedGenerator::returning("ghub");
    let server = common::create_test_server(store.clone(), Some(generator.clone()));

    let response = server.post("/api/urls").json(&json!({ "url": "" })).await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid URL");
    assert_eq!(body["details"]["reason"], "URL is required");
    assert_eq!(generator.calls(), 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store, None);

    let response = server.post("/api/urls").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["details"]["reason"], "URL is required");
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store, None);

    let response = server
        .post("/api/urls")
        .bytes(Bytes::from_static(b"{\"url\": "))
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_shorten_wrong_content_type() {
    let store = Arc::new(MemoryStore::new());
    let server = common::create_test_server(store, None);

    let response = server.post("/api/urls").text("https://example.com").await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_shorten_store_failure() {
    let store = Arc::new(MemoryStore::new());
    store.close().await.unwrap();
    let server = common::create_test_server(store, None);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Failed to store URL" }));
}
