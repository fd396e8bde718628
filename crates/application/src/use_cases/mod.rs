pub mod cache;
pub mod dns;
pub mod export;
pub mod queries;
pub mod servers;

pub use cache::{CacheEntryView, ClearCacheUseCase, GetCacheEntriesUseCase, RemoveCacheEntryUseCase};
pub use dns::ResolveQueryUseCase;
pub use export::{ExportLatestQueryUseCase, ExportedFile};
pub use queries::{GetRecentQueriesUseCase, GetResolverStatsUseCase};
pub use servers::{AddAuthServerUseCase, GetAuthServersUseCase};
