use crate::ports::{AuthoritativeTable, CacheStore};
use ferrous_sim_domain::resolution::total_time_ms;
use ferrous_sim_domain::{CacheEntry, DnsQuery, ResolutionStep, StepKind, StepStatus};

/// Address reported for the recursive resolver hop. Never contacted.
pub const RECURSIVE_RESOLVER_ADDRESS: &str = "8.8.8.8";

/// TTL given to answers cached after an authoritative lookup.
pub const RESOLVED_TTL_SECS: u32 = 300;

pub const NXDOMAIN: &str = "NXDOMAIN";
pub const CACHE_MISS: &str = "MISS";

pub const CACHE_HIT_TIME_MS: u64 = 2;
pub const CACHE_MISS_TIME_MS: u64 = 1;
pub const RECURSIVE_RESOLVER_TIME_MS: u64 = 15;
pub const AUTHORITATIVE_ANSWER_TIME_MS: u64 = 25;
pub const AUTHORITATIVE_NXDOMAIN_TIME_MS: u64 = 30;

/// Latency fed to the statistics for a cache hit.
pub const HIT_STATS_LATENCY_MS: u64 = 2;
/// Latency fed to the statistics for any miss, answered or not. This is
/// not the step total of either miss path (41 or 46).
pub const MISS_STATS_LATENCY_MS: u64 = 43;

/// Outcome of one engine run: the steps taken and the cache delta the
/// caller is expected to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub steps: Vec<ResolutionStep>,
    pub new_cache_entry: Option<CacheEntry>,
    pub cache_hit: bool,
}

impl Resolution {
    pub fn total_time_ms(&self) -> u64 {
        total_time_ms(&self.steps)
    }

    pub fn stats_latency_ms(&self) -> u64 {
        if self.cache_hit {
            HIT_STATS_LATENCY_MS
        } else {
            MISS_STATS_LATENCY_MS
        }
    }
}

/// Stateless resolution simulator.
///
/// Reads the cache and the authoritative table, never writes to either. The
/// path is cache, then a fixed recursive resolver, then the authoritative
/// table, with constant synthetic timings per hop.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolutionEngine;

impl ResolutionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        query: &DnsQuery,
        cache: &dyn CacheStore,
        servers: &dyn AuthoritativeTable,
        now_ms: i64,
    ) -> Resolution {
        let domain = query.domain.as_ref();

        if let Some(cached) = cache.lookup(domain, query.record_type, now_ms) {
            return Resolution {
                steps: vec![ResolutionStep::new(
                    StepKind::LocalCache,
                    format!("Found {} in local cache", domain),
                    cached.ip,
                    StepStatus::Success,
                    CACHE_HIT_TIME_MS,
                )],
                new_cache_entry: None,
                cache_hit: true,
            };
        }

        let mut steps = Vec::with_capacity(3);
        steps.push(ResolutionStep::new(
            StepKind::LocalCache,
            format!("{} not found in cache", domain),
            CACHE_MISS,
            StepStatus::Warning,
            CACHE_MISS_TIME_MS,
        ));
        steps.push(ResolutionStep::new(
            StepKind::RecursiveResolver,
            "Querying recursive DNS resolver",
            RECURSIVE_RESOLVER_ADDRESS,
            StepStatus::Info,
            RECURSIVE_RESOLVER_TIME_MS,
        ));

        let new_cache_entry = match servers.lookup(domain, query.record_type) {
            Some(record) => {
                steps.push(ResolutionStep::new(
                    StepKind::AuthoritativeServer,
                    format!("Resolved {} from authoritative server", domain),
                    record.ip.clone(),
                    StepStatus::Success,
                    AUTHORITATIVE_ANSWER_TIME_MS,
                ));
                Some(CacheEntry::new(
                    query.domain.clone(),
                    record.ip,
                    query.record_type,
                    RESOLVED_TTL_SECS,
                    now_ms,
                ))
            }
            None => {
                steps.push(ResolutionStep::new(
                    StepKind::AuthoritativeServer,
                    format!("No authoritative server found for {}", domain),
                    NXDOMAIN,
                    StepStatus::Error,
                    AUTHORITATIVE_NXDOMAIN_TIME_MS,
                ));
                None
            }
        };

        Resolution {
            steps,
            new_cache_entry,
            cache_hit: false,
        }
    }
}
