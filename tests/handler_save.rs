mod common;

use alias_shortener::api::handlers::save_handler;
use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;

async fn make_server() -> (TestServer, sqlx::SqlitePool) {
    let (state, pool) = common::create_test_state().await;
    let app = Router::new()
        .route("/url", post(save_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), pool)
}

// ─── SUCCESS ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_save_with_alias() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a/b", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["alias"], "ex1");
    assert_eq!(json["url"], "https://example.com/a/b");
}

#[tokio::test]
async fn test_save_generates_alias() {
    let (server, pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[tokio::test]
async fn test_save_empty_alias_generates_alias() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"].as_str().unwrap().len(), 6);
}

// ─── ERRORS ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_save_duplicate_alias() {
    let (server, pool) = make_server().await;
    common::insert_mapping(&pool, "taken", "https://first.com").await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://second.com", "alias": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["alias"], "taken");
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[tokio::test]
async fn test_save_invalid_url() {
    let (server, pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[tokio::test]
async fn test_save_non_http_scheme() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_save_malformed_alias() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "has space" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_save_alias_too_long() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "a".repeat(65) }))
        .await;

    response.assert_status_bad_request();
}
