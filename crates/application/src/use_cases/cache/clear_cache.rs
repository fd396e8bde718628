use crate::ports::CacheStore;
use std::sync::Arc;
use tracing::info;

pub struct ClearCacheUseCase {
    cache: Arc<dyn CacheStore>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    /// Empties the cache and returns how many entries it held.
    pub fn execute(&self) -> usize {
        let cleared = self.cache.len();
        self.cache.clear();
        info!(cleared, "Cache cleared");
        cleared
    }
}
