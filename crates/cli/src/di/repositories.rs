use ferrous_sim_application::ports::Clock;
use ferrous_sim_domain::Config;
use ferrous_sim_infrastructure::dns::{InMemoryAuthoritativeTable, InMemoryCacheStore};
use ferrous_sim_infrastructure::export::JsonFileExportWriter;
use ferrous_sim_infrastructure::repositories::{
    InMemoryQueryLogRepository, InMemoryStatsRepository,
};
use ferrous_sim_infrastructure::system::SystemClock;
use std::sync::Arc;
use tracing::info;

/// Session state: everything a resolution reads or mutates.
pub struct Repositories {
    pub cache: Arc<InMemoryCacheStore>,
    pub servers: Arc<InMemoryAuthoritativeTable>,
    pub query_log: Arc<InMemoryQueryLogRepository>,
    pub stats: Arc<InMemoryStatsRepository>,
    pub clock: Arc<SystemClock>,
    pub export_writer: Arc<JsonFileExportWriter>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        let clock = Arc::new(SystemClock);
        let cache = config.seed.cache_entries(clock.now_ms());
        let servers = config.seed.server_records();

        info!(
            cached = cache.len(),
            servers = servers.len(),
            "Session state seeded"
        );

        Self {
            cache: Arc::new(InMemoryCacheStore::with_entries(cache)),
            servers: Arc::new(InMemoryAuthoritativeTable::with_records(servers)),
            query_log: Arc::new(InMemoryQueryLogRepository::new()),
            stats: Arc::new(InMemoryStatsRepository::new()),
            clock,
            export_writer: Arc::new(JsonFileExportWriter::new(&config.export.directory)),
        }
    }
}
