//! Short code allocation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, warn};

use crate::domain::entities::{BaseUrl, NewUrlRecord, ShortLink, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Tunables for random code allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorPolicy {
    /// Length of generated codes.
    pub code_length: usize,
    /// Insert attempts before giving up on random codes.
    pub max_attempts: u32,
}

impl Default for AllocatorPolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: 5,
        }
    }
}

/// Turns `(url, custom_code)` pairs into persisted, uniquely keyed records.
///
/// Uniqueness is decided by the store's constraint: the service inserts first and
/// reacts to a conflict, so two concurrent allocations can never both win the
/// same code.
pub struct AllocatorService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: BaseUrl,
    policy: AllocatorPolicy,
}

impl<R: UrlRepository> AllocatorService<R> {
    /// Creates a new allocator.
    pub fn new(repository: Arc<R>, base_url: BaseUrl, policy: AllocatorPolicy) -> Self {
        Self {
            repository,
            base_url,
            policy,
        }
    }

    /// Allocates a short code for `original_url` and persists the mapping.
    ///
    /// # Code Selection
    ///
    /// - `Some(custom)` is validated and inserted verbatim exactly once
    /// - `None` generates random codes, retrying on collision up to
    ///   [`AllocatorPolicy::max_attempts`] inserts
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed URL or custom code (nothing is written)
    /// - [`AppError::Conflict`] if the custom code is taken
    /// - [`AppError::RetriesExhausted`] if every random code collided
    /// - [`AppError::Storage`] on database errors
    pub async fn allocate(
        &self,
        original_url: String,
        custom_code: Option<String>,
    ) -> Result<ShortLink, AppError> {
        validate_url(&original_url)?;

        let record = match custom_code {
            Some(custom) => self.insert_custom(original_url, custom).await?,
            None => self.insert_random(original_url).await?,
        };

        let short_url = self.base_url.short_url(&record.short_code);

        Ok(ShortLink { record, short_url })
    }

    async fn insert_custom(
        &self,
        original_url: String,
        custom: String,
    ) -> Result<UrlRecord, AppError> {
        validate_custom_code(&custom)?;

        let new_record = NewUrlRecord {
            original_url,
            short_code: custom.clone(),
        };

        match self.repository.insert(new_record).await {
            Err(e) if e.is_conflict() => Err(AppError::conflict(
                "Custom code already exists. Please choose a different one.",
                json!({ "code": custom }),
            )),
            other => other,
        }
    }

    async fn insert_random(
        &self,
        original_url: String,
    ) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.policy.max_attempts {
            let new_record = NewUrlRecord {
                original_url: original_url.clone(),
                short_code: generate_code(self.policy.code_length),
            };
            let code = new_record.short_code.clone();

            match self.repository.insert(new_record).await {
                Err(e) if e.is_conflict() => {
                    warn!(attempt, code = %code, "Generated short code collided, retrying");
                }
                other => return other,
            }
        }

        error!(
            attempts = self.policy.max_attempts,
            code_length = self.policy.code_length,
            "Exhausted short code allocation attempts"
        );

        Err(AppError::RetriesExhausted {
            attempts: self.policy.max_attempts,
        })
    }
}
