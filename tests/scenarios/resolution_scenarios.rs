use ferrous_sim_application::ports::{CacheStore, Clock, QueryLogRepository};
use ferrous_sim_application::use_cases::{
    AddAuthServerUseCase, ExportLatestQueryUseCase, GetResolverStatsUseCase, RemoveCacheEntryUseCase,
    ResolveQueryUseCase,
};
use ferrous_sim_domain::{AuthServerRecord, CacheEntry, RecordType, StepKind, StepStatus};
use ferrous_sim_infrastructure::dns::{InMemoryAuthoritativeTable, InMemoryCacheStore};
use ferrous_sim_infrastructure::export::JsonFileExportWriter;
use ferrous_sim_infrastructure::repositories::{
    InMemoryQueryLogRepository, InMemoryStatsRepository,
};
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

const T0: i64 = 1_700_000_000_000;

struct SteppedClock(AtomicI64);

impl SteppedClock {
    fn at(ms: i64) -> Self {
        Self(AtomicI64::new(ms))
    }

    fn advance_secs(&self, secs: i64) {
        self.0.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl Clock for SteppedClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

struct Session {
    cache: Arc<InMemoryCacheStore>,
    servers: Arc<InMemoryAuthoritativeTable>,
    query_log: Arc<InMemoryQueryLogRepository>,
    stats: Arc<InMemoryStatsRepository>,
    clock: Arc<SteppedClock>,
}

impl Session {
    fn new(cache: Vec<CacheEntry>, servers: Vec<AuthServerRecord>) -> Self {
        Self {
            cache: Arc::new(InMemoryCacheStore::with_entries(cache)),
            servers: Arc::new(InMemoryAuthoritativeTable::with_records(servers)),
            query_log: Arc::new(InMemoryQueryLogRepository::new()),
            stats: Arc::new(InMemoryStatsRepository::new()),
            clock: Arc::new(SteppedClock::at(T0)),
        }
    }

    fn resolver(&self) -> ResolveQueryUseCase {
        ResolveQueryUseCase::new(
            self.cache.clone(),
            self.servers.clone(),
            self.query_log.clone(),
            self.stats.clone(),
            self.clock.clone(),
        )
    }

    fn stats(&self) -> GetResolverStatsUseCase {
        GetResolverStatsUseCase::new(self.stats.clone())
    }

    fn exporter(&self, dir: &Path) -> ExportLatestQueryUseCase {
        ExportLatestQueryUseCase::new(
            self.query_log.clone(),
            self.stats.clone(),
            self.clock.clone(),
            Arc::new(JsonFileExportWriter::new(dir)),
        )
    }
}

#[test]
fn scenario_a_unknown_domain_ends_in_nxdomain() {
    let session = Session::new(vec![], vec![]);

    let completed = session
        .resolver()
        .execute("example.com", RecordType::A)
        .unwrap();

    let results: Vec<&str> = completed.steps.iter().map(|s| s.result.as_ref()).collect();
    assert_eq!(results, vec!["MISS", "8.8.8.8", "NXDOMAIN"]);
    assert_eq!(completed.steps[1].status, StepStatus::Info);
    assert_eq!(completed.steps[2].status, StepStatus::Error);
    assert_eq!(completed.total_time_ms, 46);
    assert!(completed.is_failed());
    assert_eq!(session.cache.len(), 0);

    let stats = session.stats().execute();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total_queries, 1);
    assert_eq!(stats.avg_time_ms, 43.0);
}

#[test]
fn scenario_b_authoritative_answer_is_cached() {
    let session = Session::new(
        vec![],
        vec![AuthServerRecord::new("example.com", "93.184.216.34", RecordType::A)],
    );

    let completed = session
        .resolver()
        .execute("example.com", RecordType::A)
        .unwrap();

    let last = completed.steps.last().unwrap();
    assert_eq!(last.kind, StepKind::AuthoritativeServer);
    assert_eq!(last.status, StepStatus::Success);
    assert_eq!(last.result.as_ref(), "93.184.216.34");
    assert_eq!(completed.total_time_ms, 41);

    let entries = session.cache.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].domain.as_ref(), "example.com");
    assert_eq!(entries[0].ip.as_ref(), "93.184.216.34");
    assert_eq!(entries[0].record_type, RecordType::A);
    assert_eq!(entries[0].ttl_secs, 300);
    assert_eq!(entries[0].timestamp_ms, T0);

    assert_eq!(session.stats().execute().avg_time_ms, 43.0);
}

#[test]
fn scenario_c_fresh_entry_is_a_single_step_hit() {
    let session = Session::new(
        vec![CacheEntry::new("google.com", "142.250.185.46", RecordType::A, 300, T0)],
        vec![],
    );

    let completed = session
        .resolver()
        .execute("google.com", RecordType::A)
        .unwrap();

    assert_eq!(completed.steps.len(), 1);
    assert_eq!(completed.steps[0].kind, StepKind::LocalCache);
    assert_eq!(completed.steps[0].status, StepStatus::Success);
    assert_eq!(completed.steps[0].result.as_ref(), "142.250.185.46");
    assert_eq!(completed.total_time_ms, 2);

    let stats = session.stats().execute();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.avg_time_ms, 2.0);
}

#[test]
fn scenario_d_expired_entry_is_a_miss() {
    let session = Session::new(
        vec![CacheEntry::new("x.com", "198.51.100.7", RecordType::A, 1, T0)],
        vec![],
    );
    session.clock.advance_secs(5);

    let completed = session.resolver().execute("x.com", RecordType::A).unwrap();

    assert_eq!(completed.steps[0].status, StepStatus::Warning);
    assert_eq!(completed.steps[0].result.as_ref(), "MISS");
    assert_eq!(session.stats().execute().misses, 1);
}

#[test]
fn miss_then_hit_averages_recorded_latencies() {
    let session = Session::new(
        vec![],
        vec![AuthServerRecord::new("example.com", "93.184.216.34", RecordType::A)],
    );
    let resolver = session.resolver();

    resolver.execute("https://example.com/index.html", RecordType::A).unwrap();
    session.clock.advance_secs(10);
    let second = resolver.execute("example.com", RecordType::A).unwrap();

    assert_eq!(second.steps.len(), 1);
    let stats = session.stats().execute();
    assert_eq!(stats.total_queries, 2);
    assert_eq!(stats.avg_time_ms, (43.0 + 2.0) / 2.0);
    assert_eq!(stats.hit_rate(), 50.0);

    assert_eq!(session.query_log.len(), 2);
}

#[test]
fn added_server_is_used_after_cache_entry_removed() {
    let session = Session::new(vec![], vec![]);
    let resolver = session.resolver();
    let add = AddAuthServerUseCase::new(session.servers.clone());

    assert!(resolver.execute("new.test", RecordType::AAAA).unwrap().is_failed());

    add.execute("new.test", "2001:db8::1", RecordType::AAAA).unwrap();
    let resolved = resolver.execute("new.test", RecordType::AAAA).unwrap();
    assert!(resolved.is_resolved());
    assert_eq!(resolved.answer(), Some("2001:db8::1"));

    let removed = RemoveCacheEntryUseCase::new(session.cache.clone()).execute("new.test");
    assert_eq!(removed, 1);
    let again = resolver.execute("new.test", RecordType::AAAA).unwrap();
    assert_eq!(again.steps.len(), 3);
}

#[test]
fn export_writes_latest_query_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(
        vec![],
        vec![AuthServerRecord::new("example.com", "93.184.216.34", RecordType::A)],
    );
    let exporter = session.exporter(dir.path());

    assert!(exporter.execute().is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    session.resolver().execute("example.com", RecordType::A).unwrap();
    session.clock.advance_secs(3);
    let exported = exporter.execute().unwrap();

    let expected_name = format!("dns-query-example.com-{}.json", T0 + 3000);
    assert_eq!(exported.path.file_name().unwrap().to_str().unwrap(), expected_name);

    let raw = std::fs::read_to_string(&exported.path).unwrap();
    assert!(raw.starts_with("{\n  \"domain\""));

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["queryType"], "A");
    assert_eq!(json["totalResolutionTime"], "41ms");
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    assert_eq!(json["steps"][0]["stepNumber"], 1);
    assert_eq!(json["steps"][0]["status"], "warning");
    assert_eq!(json["steps"][2]["time"], "25ms");
    assert_eq!(json["statistics"]["cacheMisses"], 1);
    assert_eq!(json["statistics"]["hitRate"], "0.0%");
    assert_eq!(json["statistics"]["averageTime"], "43.00ms");
}

#[test]
fn concurrent_resolutions_of_one_domain_cache_it_once() {
    let session = Session::new(
        vec![],
        vec![AuthServerRecord::new("example.com", "93.184.216.34", RecordType::A)],
    );
    let resolver = Arc::new(session.resolver());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                (0..25)
                    .map(|_| resolver.execute("example.com", RecordType::A).unwrap())
                    .filter(|completed| completed.steps.len() == 3)
                    .count()
            })
        })
        .collect();
    let misses: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(misses, 1);
    assert_eq!(session.cache.len(), 1);

    let stats = session.stats().execute();
    assert_eq!(stats.total_queries, 200);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 199);
    assert!((stats.avg_time_ms - (43.0 + 199.0 * 2.0) / 200.0).abs() < 1e-9);
    assert_eq!(session.query_log.len(), 200);
}
