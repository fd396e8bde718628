use super::RecordType;
use std::sync::Arc;

/// A resolved answer held by the local cache.
///
/// Freshness is evaluated lazily against the caller's clock; an expired entry
/// stays in storage until it is removed or the cache is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub domain: Arc<str>,
    pub ip: Arc<str>,
    pub record_type: RecordType,
    pub ttl_secs: u32,
    /// Insertion time, epoch milliseconds.
    pub timestamp_ms: i64,
}

impl CacheEntry {
    pub fn new(
        domain: impl Into<Arc<str>>,
        ip: impl Into<Arc<str>>,
        record_type: RecordType,
        ttl_secs: u32,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            domain: domain.into(),
            ip: ip.into(),
            record_type,
            ttl_secs,
            timestamp_ms,
        }
    }

    #[inline]
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp_ms < i64::from(self.ttl_secs) * 1000
    }

    #[inline]
    pub fn matches(&self, domain: &str, record_type: RecordType) -> bool {
        self.record_type == record_type && self.domain.as_ref() == domain
    }

    /// Whole seconds of TTL left at `now_ms`, floored at zero.
    pub fn remaining_ttl_secs(&self, now_ms: i64) -> u32 {
        let elapsed_secs = (now_ms - self.timestamp_ms).div_euclid(1000);
        let remaining = i64::from(self.ttl_secs) - elapsed_secs;
        remaining.clamp(0, i64::from(u32::MAX)) as u32
    }
}
