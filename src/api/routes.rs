//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, health_handler, list_urls_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a short link
/// - `GET    /urls`           - List short links, newest first
/// - `DELETE /urls/{code}`    - Delete a short link
/// - `GET    /stats/{code}`   - Click statistics for a short link
/// - `GET    /health`         - Health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{code}", delete(delete_url_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
}
