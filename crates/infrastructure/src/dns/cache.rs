use ferrous_sim_application::ports::CacheStore;
use ferrous_sim_domain::{CacheEntry, RecordType};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Append-only cache backed by a vector.
///
/// Nothing is evicted in the background; stale entries sit in the vector
/// until removed by domain or the whole cache is cleared.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<Vec<CacheEntry>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<CacheEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl CacheStore for InMemoryCacheStore {
    fn lookup(&self, domain: &str, record_type: RecordType, now_ms: i64) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .iter()
            .find(|e| e.matches(domain, record_type) && e.is_fresh(now_ms))
            .cloned()
    }

    fn insert(&self, entry: CacheEntry) {
        debug!(domain = %entry.domain, record_type = %entry.record_type, "Cache insert");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    fn remove_by_domain(&self, domain: &str) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|e| e.domain.as_ref() != domain);
        before - entries.len()
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn entries(&self) -> Vec<CacheEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
