//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str =
    "SELECT id, original_url, short_code, clicks, created_at, last_accessed FROM urls";

/// SQLite repository backed by the `urls` table.
///
/// All statements are parameterized. The click increment is a single
/// `UPDATE ... SET clicks = clicks + 1`, so concurrent hits never lose updates.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original_url, short_code, clicks, created_at)
            VALUES (?, ?, 0, ?)
            RETURNING id, original_url, short_code, clicks, created_at, last_accessed
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record =
            sqlx::query_as::<_, UrlRecord>(&format!("{SELECT_COLUMNS} WHERE short_code = ?"))
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(record)
    }

    async fn record_hit(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE urls SET clicks = clicks + 1, last_accessed = ? WHERE short_code = ?",
        )
        .bind(Utc::now())
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
