use ferrous_sim_application::ports::StatsRepository;
use ferrous_sim_domain::ResolverStats;
use std::sync::{Mutex, PoisonError};

/// Session statistics behind a mutex, so the read of the previous total and
/// the increment happen under one lock.
#[derive(Debug, Default)]
pub struct InMemoryStatsRepository {
    stats: Mutex<ResolverStats>,
}

impl InMemoryStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsRepository for InMemoryStatsRepository {
    fn record_hit(&self, latency_ms: u64) {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_hit(latency_ms);
    }

    fn record_miss(&self, latency_ms: u64) {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_miss(latency_ms);
    }

    fn snapshot(&self) -> ResolverStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
