#![allow(dead_code)]
#![allow(unused_imports)]

use ferrous_sim_application::ports::{
    AuthoritativeTable, CacheStore, Clock, ExportWriter, QueryLogRepository, StatsRepository,
};
use ferrous_sim_domain::{
    AuthServerRecord, CacheEntry, CompletedQuery, DomainError, RecordType, ResolverStats,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

pub const T0: i64 = 1_700_000_000_000;

#[derive(Default)]
pub struct MockCacheStore {
    entries: RwLock<Vec<CacheEntry>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<CacheEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl CacheStore for MockCacheStore {
    fn lookup(&self, domain: &str, record_type: RecordType, now_ms: i64) -> Option<CacheEntry> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .find(|e| e.matches(domain, record_type) && e.is_fresh(now_ms))
            .cloned()
    }

    fn insert(&self, entry: CacheEntry) {
        self.entries.write().unwrap().push(entry);
    }

    fn remove_by_domain(&self, domain: &str) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|e| e.domain.as_ref() != domain);
        before - entries.len()
    }

    fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    fn entries(&self) -> Vec<CacheEntry> {
        self.entries.read().unwrap().clone()
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

#[derive(Default)]
pub struct MockAuthoritativeTable {
    records: RwLock<Vec<AuthServerRecord>>,
    lookups: AtomicI64,
}

impl MockAuthoritativeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AuthServerRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            lookups: AtomicI64::new(0),
        }
    }

    pub fn lookup_count(&self) -> i64 {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl AuthoritativeTable for MockAuthoritativeTable {
    fn lookup(&self, domain: &str, record_type: RecordType) -> Option<AuthServerRecord> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.matches(domain, record_type))
            .cloned()
    }

    fn insert(&self, record: AuthServerRecord) {
        self.records.write().unwrap().push(record);
    }

    fn records(&self) -> Vec<AuthServerRecord> {
        self.records.read().unwrap().clone()
    }

    fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

#[derive(Default)]
pub struct MockQueryLogRepository {
    queries: RwLock<Vec<CompletedQuery>>,
}

impl MockQueryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryLogRepository for MockQueryLogRepository {
    fn append(&self, query: CompletedQuery) {
        self.queries.write().unwrap().insert(0, query);
    }

    fn recent(&self, limit: Option<usize>) -> Vec<CompletedQuery> {
        let queries = self.queries.read().unwrap();
        let take = limit.unwrap_or(queries.len());
        queries.iter().take(take).cloned().collect()
    }

    fn latest(&self) -> Option<CompletedQuery> {
        self.queries.read().unwrap().first().cloned()
    }

    fn len(&self) -> usize {
        self.queries.read().unwrap().len()
    }
}

#[derive(Default)]
pub struct MockStatsRepository {
    stats: Mutex<ResolverStats>,
}

impl MockStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsRepository for MockStatsRepository {
    fn record_hit(&self, latency_ms: u64) {
        self.stats.lock().unwrap().record_hit(latency_ms);
    }

    fn record_miss(&self, latency_ms: u64) {
        self.stats.lock().unwrap().record_miss(latency_ms);
    }

    fn snapshot(&self) -> ResolverStats {
        *self.stats.lock().unwrap()
    }
}

pub struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now_ms.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct MockExportWriter {
    written: Mutex<Vec<(String, String)>>,
    should_fail: bool,
}

impl MockExportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn written(&self) -> Vec<(String, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl ExportWriter for MockExportWriter {
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError> {
        if self.should_fail {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.written
            .lock()
            .unwrap()
            .push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from("/exports").join(file_name))
    }
}

/// All session state behind mocks, wired the way the binary wires it.
pub struct Session {
    pub cache: Arc<MockCacheStore>,
    pub servers: Arc<MockAuthoritativeTable>,
    pub query_log: Arc<MockQueryLogRepository>,
    pub stats: Arc<MockStatsRepository>,
    pub clock: Arc<ManualClock>,
}

impl Session {
    pub fn new(cache: Vec<CacheEntry>, servers: Vec<AuthServerRecord>) -> Self {
        Self {
            cache: Arc::new(MockCacheStore::with_entries(cache)),
            servers: Arc::new(MockAuthoritativeTable::with_records(servers)),
            query_log: Arc::new(MockQueryLogRepository::new()),
            stats: Arc::new(MockStatsRepository::new()),
            clock: Arc::new(ManualClock::new(T0)),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
