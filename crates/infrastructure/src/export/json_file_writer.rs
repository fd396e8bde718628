use ferrous_sim_application::ports::ExportWriter;
use ferrous_sim_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Writes export documents as files under a fixed directory.
#[derive(Debug, Clone)]
pub struct JsonFileExportWriter {
    directory: PathBuf,
}

impl JsonFileExportWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ExportWriter for JsonFileExportWriter {
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError> {
        if file_name.contains(['/', '\\']) {
            return Err(DomainError::IoError(format!(
                "Refusing to write export outside {}: {}",
                self.directory.display(),
                file_name
            )));
        }

        std::fs::create_dir_all(&self.directory).map_err(|e| {
            error!(directory = %self.directory.display(), error = %e, "Failed to create export directory");
            DomainError::IoError(e.to_string())
        })?;

        let path = self.directory.join(file_name);
        std::fs::write(&path, contents).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to write export");
            DomainError::IoError(e.to_string())
        })?;

        debug!(path = %path.display(), bytes = contents.len(), "Export written");
        Ok(path)
    }
}
