//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url_record::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "customCode": "my-link"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com",
///   "shortCode": "my-link",
///   "shortUrl": "http://localhost:5000/my-link",
///   "clicks": 0,
///   "createdAt": "2025-01-01T12:00:00Z",
///   "lastAccessed": null
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL or custom code is invalid
/// - 409 Conflict if the custom code is already taken
/// - 500 Internal Server Error if no unique code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state.allocator.allocate(url, payload.custom_code).await?;

    info!(
        code = %link.record.short_code,
        id = link.record.id,
        "Short link created"
    );

    Ok(Json(UrlResponse::from_record(link.record, link.short_url)))
}
