use super::Repositories;
use ferrous_sim_application::use_cases::{
    AddAuthServerUseCase, ClearCacheUseCase, ExportLatestQueryUseCase, GetAuthServersUseCase,
    GetCacheEntriesUseCase, GetRecentQueriesUseCase, GetResolverStatsUseCase,
    RemoveCacheEntryUseCase, ResolveQueryUseCase,
};

pub struct UseCases {
    pub resolve: ResolveQueryUseCase,
    pub get_cache: GetCacheEntriesUseCase,
    pub remove_cache_entry: RemoveCacheEntryUseCase,
    pub clear_cache: ClearCacheUseCase,
    pub add_server: AddAuthServerUseCase,
    pub get_servers: GetAuthServersUseCase,
    pub get_queries: GetRecentQueriesUseCase,
    pub get_stats: GetResolverStatsUseCase,
    pub export: ExportLatestQueryUseCase,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            resolve: ResolveQueryUseCase::new(
                repos.cache.clone(),
                repos.servers.clone(),
                repos.query_log.clone(),
                repos.stats.clone(),
                repos.clock.clone(),
            ),
            get_cache: GetCacheEntriesUseCase::new(repos.cache.clone(), repos.clock.clone()),
            remove_cache_entry: RemoveCacheEntryUseCase::new(repos.cache.clone()),
            clear_cache: ClearCacheUseCase::new(repos.cache.clone()),
            add_server: AddAuthServerUseCase::new(repos.servers.clone()),
            get_servers: GetAuthServersUseCase::new(repos.servers.clone()),
            get_queries: GetRecentQueriesUseCase::new(repos.query_log.clone()),
            get_stats: GetResolverStatsUseCase::new(repos.stats.clone()),
            export: ExportLatestQueryUseCase::new(
                repos.query_log.clone(),
                repos.stats.clone(),
                repos.clock.clone(),
                repos.export_writer.clone(),
            ),
        }
    }
}
