//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AllocatorPolicy, AllocatorService, LinkService};
use crate::domain::entities::BaseUrl;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Services shared across requests.
///
/// Cloning is cheap: every field is reference-counted and all of them wrap the
/// same repository and pool.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<AllocatorService<SqliteUrlRepository>>,
    pub link_service: Arc<LinkService<SqliteUrlRepository>>,
}

impl AppState {
    pub fn new(
        allocator: Arc<AllocatorService<SqliteUrlRepository>>,
        link_service: Arc<LinkService<SqliteUrlRepository>>,
    ) -> Self {
        Self {
            allocator,
            link_service,
        }
    }

    /// Wires both services over one shared repository.
    pub fn build(
        repository: Arc<SqliteUrlRepository>,
        base_url: BaseUrl,
        policy: AllocatorPolicy,
    ) -> Self {
        let allocator = Arc::new(AllocatorService::new(
            repository.clone(),
            base_url.clone(),
            policy,
        ));
        let link_service = Arc::new(LinkService::new(repository, base_url));

        Self::new(allocator, link_service)
    }
}
