use serde::{Deserialize, Serialize};

/// Level names the binary's subscriber understands.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// `[logging]` table. The level is kept as text and only interpreted by the
/// binary, which falls back to `info` for anything outside `LOG_LEVELS`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn is_known_level(&self) -> bool {
        let level = self.level.trim();
        LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
