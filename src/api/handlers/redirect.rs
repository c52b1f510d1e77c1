//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// HTML page shown when a short code doesn't exist.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Count the click (best effort, failures are logged only)
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns a 404 HTML page if the short code doesn't exist.
/// Returns 500 if the lookup itself fails.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.resolve_redirect(&code).await {
        Ok(record) => redirect_to(&code, &record.original_url),
        Err(AppError::NotFound { .. }) => {
            debug!(code, "Short code not found");
            (StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Builds a 307 response for `target`.
///
/// Targets are stored verbatim, so a URL with non-ASCII characters falls back to
/// its percent-encoded serialization for the `Location` header.
fn redirect_to(code: &str, target: &str) -> Response {
    let location = HeaderValue::from_str(target).ok().or_else(|| {
        Url::parse(target)
            .ok()
            .and_then(|u| HeaderValue::from_str(u.as_str()).ok())
    });

    match location {
        Some(location) => {
            (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
        }
        None => {
            error!(code, target, "Stored URL is not a valid Location header");
            AppError::storage(
                "Stored URL cannot be used as a redirect target",
                json!({ "code": code }),
            )
            .into_response()
        }
    }
}
