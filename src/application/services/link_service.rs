//! Lookup, listing, deletion and redirect resolution for short links.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{BaseUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for reading and removing existing short links.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: BaseUrl,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, base_url: BaseUrl) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Lists records newest first, truncated to `limit` when given.
    pub async fn list_links(&self, limit: Option<usize>) -> Result<Vec<UrlRecord>, AppError> {
        let mut records = self.repository.list().await?;

        if let Some(limit) = limit {
            records.truncate(limit);
        }

        Ok(records)
    }

    /// Deletes a record. Returns whether a row was actually removed.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        let deleted = self.repository.delete(code).await?;
        debug!(code, deleted, "Delete requested");
        Ok(deleted)
    }

    /// Resolves a short code for redirection and counts the click.
    ///
    /// The click increment is best effort: a storage failure there is logged and
    /// the redirect still proceeds with the looked-up record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code doesn't exist.
    /// Returns [`AppError::Storage`] if the lookup itself fails.
    pub async fn resolve_redirect(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self.get_link(code).await?;

        match self.repository.record_hit(code).await {
            Ok(true) => {}
            Ok(false) => debug!(code, "Record vanished before click was counted"),
            Err(e) => warn!(code, error = %e, "Failed to record click"),
        }

        Ok(record)
    }

    /// Number of stored records.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Builds the shareable URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        self.base_url.short_url(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::{Duration, Utc};

    fn create_test_record(id: i64, code: &str, url: &str) -> UrlRecord {
        UrlRecord::new(
            id,
            url.to_string(),
            code.to_string(),
            0,
            Utc::now() - Duration::minutes(id),
            None,
        )
    }

    fn service(repo: MockUrlRepository) -> LinkService<MockUrlRepository> {
        LinkService::new(Arc::new(repo), BaseUrl::new("https://s.example.com/"))
    }

    #[tokio::test]
    async fn test_get_link_found() {
        let mut mock_repo = MockUrlRepository::new();
        let record = create_test_record(1, "abc", "https://example.com");
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc")
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let link = service(mock_repo).get_link("abc").await.unwrap();
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let err = service(mock_repo).get_link("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_links_applies_limit() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok((1..=5)
                .map(|i| create_test_record(i, &format!("c{i}"), "https://example.com"))
                .collect())
        });

        let links = service(mock_repo).list_links(Some(2)).await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].short_code, "c1");
    }

    #[tokio::test]
    async fn test_list_links_without_limit() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok((1..=3)
                .map(|i| create_test_record(i, &format!("c{i}"), "https://example.com"))
                .collect())
        });

        let links = service(mock_repo).list_links(None).await.unwrap();
        assert_eq!(links.len(), 3);
    }

    #[tokio::test]
    async fn test_resolve_redirect_records_hit() {
        let mut mock_repo = MockUrlRepository::new();
        let record = create_test_record(1, "go", "https://example.com/target");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));
        mock_repo
            .expect_record_hit()
            .withf(|code| code == "go")
            .times(1)
            .returning(|_| Ok(true));

        let link = service(mock_repo).resolve_redirect("go").await.unwrap();
        assert_eq!(link.original_url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_redirect_survives_failed_hit() {
        let mut mock_repo = MockUrlRepository::new();
        let record = create_test_record(1, "go", "https://example.com/target");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));
        mock_repo
            .expect_record_hit()
            .times(1)
            .returning(|_| Err(AppError::storage("Database error", json!({}))));

        let result = service(mock_repo).resolve_redirect("go").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_redirect_missing_code_skips_hit() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_record_hit().times(0);

        let err = service(mock_repo).resolve_redirect("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_link_reports_outcome() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .times(2)
            .returning(|code| Ok(code == "present"));

        let service = service(mock_repo);
        assert!(service.delete_link("present").await.unwrap());
        assert!(!service.delete_link("absent").await.unwrap());
    }

    #[test]
    fn test_short_url() {
        let service = service(MockUrlRepository::new());
        assert_eq!(service.short_url("abc"), "https://s.example.com/abc");
    }
}
