mod authoritative_table;
mod cache_store;
mod clock;
mod export_writer;
mod query_log_repository;
mod stats_repository;

pub use authoritative_table::AuthoritativeTable;
pub use cache_store::CacheStore;
pub use clock::Clock;
pub use export_writer::ExportWriter;
pub use query_log_repository::QueryLogRepository;
pub use stats_repository::StatsRepository;
