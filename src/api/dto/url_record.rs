//! Public representation of a stored short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A short link as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl UrlResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            short_url,
            clicks: record.clicks,
            created_at: record.created_at,
            last_accessed: record.last_accessed,
        }
    }
}

/// Confirmation returned after a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
