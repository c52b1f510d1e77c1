//! Repository trait for short code storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable keyed storage for [`UrlRecord`]s.
///
/// Every operation is individually atomic at the storage layer. Short code
/// uniqueness is enforced by the store itself, never by check-then-insert in the
/// caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `clicks = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments `clicks` and sets `last_accessed = now`.
    ///
    /// Returns `Ok(false)` when no record matches `code`; a missing code is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_hit(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Removes the record for `code`.
    ///
    /// Returns `Ok(true)` if a row was removed and `Ok(false)` if nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
