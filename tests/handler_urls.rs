mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get},
};
use axum_test::TestServer;
use sqlx::SqlitePool;
use tinylink::api::handlers::{delete_url_handler, list_urls_handler};

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/urls", get(list_urls_handler))
        .route("/api/urls/{code}", delete(delete_url_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let server = make_server(common::test_pool().await);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let items = response.json::<Vec<serde_json::Value>>();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_newest_first() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "older", "https://older.example").await;
    common::create_test_link(&pool, "newer", "https://newer.example").await;
    let server = make_server(pool);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let items = response.json::<Vec<serde_json::Value>>();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["shortCode"], "newer");
    assert_eq!(items[1]["shortCode"], "older");
    assert_eq!(items[0]["shortUrl"], "http://localhost:5000/newer");
    assert!(items[0].get("originalUrl").is_some());
    assert!(items[0].get("clicks").is_some());
    assert!(items[0].get("createdAt").is_some());
    assert!(items[0].get("lastAccessed").is_some());
}

#[tokio::test]
async fn test_list_with_limit() {
    let pool = common::test_pool().await;
    for code in ["a", "b", "c"] {
        common::create_test_link(&pool, code, "https://example.com").await;
    }
    let server = make_server(pool);

    let response = server.get("/api/urls").add_query_param("limit", 2).await;

    response.assert_status_ok();
    let items = response.json::<Vec<serde_json::Value>>();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["shortCode"], "c");
}

#[tokio::test]
async fn test_list_invalid_limit() {
    let server = make_server(common::test_pool().await);

    let response = server.get("/api/urls?limit=many").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "gone", "https://example.com").await;
    let server = make_server(pool.clone());

    let response = server.delete("/api/urls/gone").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "URL deleted successfully");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "once", "https://example.com").await;
    let server = make_server(pool);

    server.delete("/api/urls/once").await.assert_status_ok();

    let response = server.delete("/api/urls/once").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_leaves_other_links() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "keep", "https://keep.example").await;
    common::create_test_link(&pool, "drop", "https://drop.example").await;
    let server = make_server(pool.clone());

    server.delete("/api/urls/drop").await.assert_status_ok();

    let response = server.get("/api/urls").await;
    let items = response.json::<Vec<serde_json::Value>>();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["shortCode"], "keep");
}
