pub mod query_log_repository;
pub mod stats_repository;

pub use query_log_repository::InMemoryQueryLogRepository;
pub use stats_repository::InMemoryStatsRepository;
