//! URL record entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to its original URL.
///
/// Rows are created by the allocator, read by the redirect path and removed by a
/// hard delete. `clicks` and `last_accessed` are only touched by redirect hits.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        last_accessed: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            clicks,
            created_at,
            last_accessed,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
}

/// A freshly allocated record together with its shareable URL.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub record: UrlRecord,
    pub short_url: String,
}
