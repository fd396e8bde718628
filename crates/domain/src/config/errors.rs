use thiserror::Error;

/// Failures while loading, checking or saving the simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read simulator config {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Cannot write simulator config {path}: {reason}")]
    FileWrite { path: String, reason: String },

    #[error("Invalid TOML in simulator config: {0}")]
    Parse(String),

    #[error("Cannot encode simulator config as TOML: {0}")]
    Serialize(String),

    #[error("Rejected simulator config: {0}")]
    Validation(String),
}
