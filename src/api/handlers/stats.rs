//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url_record::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a short link with its click count and last access time.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state.link_service.get_link(&code).await?;
    let short_url = state.link_service.short_url(&record.short_code);

    Ok(Json(UrlResponse::from_record(record, short_url)))
}
