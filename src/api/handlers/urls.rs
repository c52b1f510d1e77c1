//! Handlers for listing and deleting short links.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::info;

use crate::api::dto::list::ListParams;
use crate::api::dto::url_record::{MessageResponse, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists short links, newest first.
///
/// # Endpoint
///
/// `GET /api/urls?limit=10`
///
/// `limit` is optional; without it every link is returned.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let records = state.link_service.list_links(params.limit).await?;

    let items = records
        .into_iter()
        .map(|record| {
            let short_url = state.link_service.short_url(&record.short_code);
            UrlResponse::from_record(record, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this code. Repeating a successful delete
/// therefore yields 404.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.link_service.delete_link(&code).await? {
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        ));
    }

    info!(code, "Short link deleted");

    Ok(Json(MessageResponse {
        message: "URL deleted successfully".to_string(),
    }))
}
