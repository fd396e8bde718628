pub mod get_recent;
pub mod get_stats;

pub use get_recent::GetRecentQueriesUseCase;
pub use get_stats::GetResolverStatsUseCase;
