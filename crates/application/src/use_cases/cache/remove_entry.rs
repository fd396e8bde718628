use crate::ports::CacheStore;
use std::sync::Arc;
use tracing::info;

/// Drops every cached record for a domain. Record type is not considered.
pub struct RemoveCacheEntryUseCase {
    cache: Arc<dyn CacheStore>,
}

impl RemoveCacheEntryUseCase {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    pub fn execute(&self, domain: &str) -> usize {
        let removed = self.cache.remove_by_domain(domain.trim());
        info!(domain = %domain.trim(), removed, "Removed domain from cache");
        removed
    }
}
