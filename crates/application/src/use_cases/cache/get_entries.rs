use crate::ports::{CacheStore, Clock};
use ferrous_sim_domain::CacheEntry;
use std::sync::Arc;

/// A cache entry as listed to the user, with its TTL countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntryView {
    pub entry: CacheEntry,
    pub remaining_ttl_secs: u32,
    pub fresh: bool,
}

pub struct GetCacheEntriesUseCase {
    cache: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
}

impl GetCacheEntriesUseCase {
    pub fn new(cache: Arc<dyn CacheStore>, clock: Arc<dyn Clock>) -> Self {
        Self { cache, clock }
    }

    pub fn execute(&self) -> Vec<CacheEntryView> {
        let now_ms = self.clock.now_ms();
        self.cache
            .entries()
            .into_iter()
            .map(|entry| CacheEntryView {
                remaining_ttl_secs: entry.remaining_ttl_secs(now_ms),
                fresh: entry.is_fresh(now_ms),
                entry,
            })
            .collect()
    }
}
