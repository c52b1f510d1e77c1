#![allow(dead_code)]

use axum::extract::ConnectInfo;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tinylink::application::services::AllocatorPolicy;
use tinylink::domain::entities::BaseUrl;
use tinylink::infrastructure::persistence::{SqliteUrlRepository, database};
use tinylink::state::AppState;
use tower::Layer;

pub const BASE_URL: &str = "http://localhost:5000";

/// Opens a fresh in-memory database with the schema applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    database::migrate(&pool).await.unwrap();
    pool
}

pub fn create_repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::build(
        Arc::new(create_repository(pool)),
        BaseUrl::new(BASE_URL),
        AllocatorPolicy::default(),
    )
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (original_url, short_code, clicks, created_at) VALUES (?, ?, 0, ?) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Injects a fixed peer address so the per-IP rate limiter can key requests.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
