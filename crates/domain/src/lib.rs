//! Ferrous DNS Simulator Domain Layer
pub mod auth_server;
pub mod cache_entry;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod export;
pub mod query_log;
pub mod resolution;
pub mod resolver_stats;

pub use auth_server::AuthServerRecord;
pub use cache_entry::CacheEntry;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{extract_domain, DnsQuery};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use export::{to_fixed, ExportedStatistics, ExportedStep, QueryExport};
pub use query_log::CompletedQuery;
pub use resolution::{ResolutionStep, StepKind, StepStatus};
pub use resolver_stats::ResolverStats;
