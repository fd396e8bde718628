use ferrous_sim_domain::{CacheEntry, RecordType};

/// Port for the local resolver cache.
///
/// Entries are kept in insertion order. Expired entries are skipped by
/// `lookup` but never evicted by it.
pub trait CacheStore: Send + Sync {
    /// First entry matching `domain` and `record_type` that is fresh at `now_ms`.
    fn lookup(&self, domain: &str, record_type: RecordType, now_ms: i64) -> Option<CacheEntry>;

    fn insert(&self, entry: CacheEntry);

    /// Removes every entry for `domain`, whatever its record type.
    /// Returns how many entries were dropped.
    fn remove_by_domain(&self, domain: &str) -> usize;

    fn clear(&self);

    fn entries(&self) -> Vec<CacheEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
