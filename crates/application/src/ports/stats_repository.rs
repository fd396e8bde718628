use ferrous_sim_domain::ResolverStats;

/// Owner of the session-wide statistics. Each call is one completed query.
pub trait StatsRepository: Send + Sync {
    fn record_hit(&self, latency_ms: u64);
    fn record_miss(&self, latency_ms: u64);
    fn snapshot(&self) -> ResolverStats;
}
