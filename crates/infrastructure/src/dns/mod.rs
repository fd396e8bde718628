pub mod authority;
pub mod cache;

pub use authority::InMemoryAuthoritativeTable;
pub use cache::InMemoryCacheStore;
