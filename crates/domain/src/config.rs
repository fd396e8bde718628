pub mod errors;
pub mod export;
pub mod logging;
pub mod root;
pub mod seed;

pub use errors::ConfigError;
pub use export::ExportConfig;
pub use logging::{LoggingConfig, LOG_LEVELS};
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
pub use seed::{SeedCacheEntry, SeedConfig, SeedServerRecord};
