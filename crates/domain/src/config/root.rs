use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::export::ExportConfig;
use super::logging::LoggingConfig;
use super::seed::SeedConfig;

pub const DEFAULT_CONFIG_FILE: &str = "ferrous-sim.toml";

/// Main configuration structure for the simulator
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where export documents are written
    #[serde(default)]
    pub export: ExportConfig,

    /// Initial cache and authoritative table
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-sim.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(directory) = overrides.export_directory {
            self.export.directory = directory;
        }
        if overrides.no_seed {
            self.seed.use_defaults = false;
            self.seed.cache.clear();
            self.seed.servers.clear();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export.directory.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Export directory cannot be empty".to_string(),
            ));
        }

        self.seed.validate().map_err(ConfigError::Validation)?;

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub export_directory: Option<String>,
    pub no_seed: bool,
}
