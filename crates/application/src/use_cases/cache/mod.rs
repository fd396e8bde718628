pub mod clear_cache;
pub mod get_entries;
pub mod remove_entry;

pub use clear_cache::ClearCacheUseCase;
pub use get_entries::{CacheEntryView, GetCacheEntriesUseCase};
pub use remove_entry::RemoveCacheEntryUseCase;
