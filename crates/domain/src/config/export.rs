use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory export documents are written to
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

fn default_export_directory() -> String {
    ".".to_string()
}
