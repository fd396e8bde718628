use ferrous_sim_domain::DomainError;
use std::path::PathBuf;

/// Destination for serialized export documents.
pub trait ExportWriter: Send + Sync {
    /// Persists `contents` under `file_name` and returns where it landed.
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError>;
}
