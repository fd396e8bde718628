/// Running counters over every completed query in a session.
///
/// `avg_time_ms` is maintained as an incremental mean, so the order of the
/// update matters: the previous `total_queries` is read before it is bumped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolverStats {
    pub hits: u64,
    pub misses: u64,
    pub total_queries: u64,
    pub avg_time_ms: f64,
}

impl ResolverStats {
    pub fn record_hit(&mut self, latency_ms: u64) {
        self.record(latency_ms);
        self.hits += 1;
    }

    pub fn record_miss(&mut self, latency_ms: u64) {
        self.record(latency_ms);
        self.misses += 1;
    }

    fn record(&mut self, latency_ms: u64) {
        let previous = self.total_queries as f64;
        self.avg_time_ms = (self.avg_time_ms * previous + latency_ms as f64) / (previous + 1.0);
        self.total_queries += 1;
    }

    /// Percentage of queries answered from cache, 0 when nothing was queried.
    pub fn hit_rate(&self) -> f64 {
        if self.total_queries == 0 {
            return 0.0;
        }
        (self.hits as f64 / self.total_queries as f64) * 100.0
    }
}
