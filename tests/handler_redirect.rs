mod common;

use alias_shortener::api::handlers::redirect_handler;
use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;

async fn make_server() -> (TestServer, sqlx::SqlitePool) {
    let (state, pool) = common::create_test_state().await;
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), pool)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, pool) = make_server().await;
    common::insert_mapping(&pool, "ex1", "https://example.com/a/b").await;

    let response = server.get("/ex1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/a/b");
}

#[tokio::test]
async fn test_redirect_preserves_target_exactly() {
    let (server, pool) = make_server().await;
    let target = "https://Example.com:443/Path/?b=2&a=1#frag";
    common::insert_mapping(&pool, "exact", target).await;

    let response = server.get("/exact").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), target);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _pool) = make_server().await;

    let response = server.get("/never-saved").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, pool) = make_server().await;
    common::insert_mapping(&pool, "AbC", "https://example.com").await;

    server.get("/abc").await.assert_status_not_found();
    server
        .get("/AbC")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
}
