//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check
//! - `/api/*`            - JSON API (rate limited, CORS, 10 KiB body limit)
//!
//! Every response carries the headers in [`security_headers::SECURITY_HEADERS`].
//!
//! Trailing-slash normalization is applied around the whole router in
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, rate_limit, security_headers, tracing};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

/// Maximum accepted request body size for the API.
pub const MAX_BODY_BYTES: usize = 10 * 1024;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - allowed browser origin for the API, see [`cors::layer`]
pub fn app_router(state: AppState, cors_origin: Option<&str>) -> Router {
    let api_router = api::routes::api_routes()
        .layer(rate_limit::api_layer())
        .layer(cors::layer(cors_origin))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state);

    security_headers::apply(router).layer(tracing::layer())
}
