use crate::ports::{AuthoritativeTable, CacheStore, Clock, QueryLogRepository, StatsRepository};
use crate::services::ResolutionEngine;
use ferrous_sim_domain::{CompletedQuery, DnsQuery, DomainError, RecordType};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Runs a query through the engine and applies its deltas: the new cache
/// entry, one stats update and one query log entry.
pub struct ResolveQueryUseCase {
    engine: ResolutionEngine,
    cache: Arc<dyn CacheStore>,
    servers: Arc<dyn AuthoritativeTable>,
    query_log: Arc<dyn QueryLogRepository>,
    stats: Arc<dyn StatsRepository>,
    clock: Arc<dyn Clock>,
    // Held for a whole resolution so concurrent callers are serialized.
    in_flight: Mutex<()>,
}

impl ResolveQueryUseCase {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        servers: Arc<dyn AuthoritativeTable>,
        query_log: Arc<dyn QueryLogRepository>,
        stats: Arc<dyn StatsRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            engine: ResolutionEngine::new(),
            cache,
            servers,
            query_log,
            stats,
            clock,
            in_flight: Mutex::new(()),
        }
    }

    /// Validates raw user input, then resolves it.
    pub fn execute(&self, input: &str, record_type: RecordType) -> Result<CompletedQuery, DomainError> {
        let query = DnsQuery::from_input(input, record_type, self.clock.now_ms()).map_err(|e| {
            warn!(input = %input, error = %e, "Rejected query input");
            e
        })?;

        Ok(self.resolve(query))
    }

    pub fn resolve(&self, query: DnsQuery) -> CompletedQuery {
        let _serial = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        let now_ms = self.clock.now_ms();
        let resolution =
            self.engine
                .resolve(&query, self.cache.as_ref(), self.servers.as_ref(), now_ms);

        if let Some(entry) = resolution.new_cache_entry.clone() {
            debug!(domain = %entry.domain, ip = %entry.ip, ttl = entry.ttl_secs, "Caching authoritative answer");
            self.cache.insert(entry);
        }

        let latency_ms = resolution.stats_latency_ms();
        if resolution.cache_hit {
            self.stats.record_hit(latency_ms);
        } else {
            self.stats.record_miss(latency_ms);
        }

        let completed = CompletedQuery::new(
            DnsQuery {
                timestamp_ms: now_ms,
                ..query
            },
            resolution.steps,
        );

        debug!(
            domain = %completed.query.domain,
            record_type = %completed.query.record_type,
            cache_hit = resolution.cache_hit,
            resolved = completed.is_resolved(),
            total_time_ms = completed.total_time_ms,
            "Query resolved"
        );

        self.query_log.append(completed.clone());
        completed
    }
}
