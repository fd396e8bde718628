use crate::ports::{Clock, ExportWriter, QueryLogRepository, StatsRepository};
use ferrous_sim_domain::{DomainError, QueryExport};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub document: QueryExport,
}

/// Exports the most recent completed query with the current statistics.
pub struct ExportLatestQueryUseCase {
    query_log: Arc<dyn QueryLogRepository>,
    stats: Arc<dyn StatsRepository>,
    clock: Arc<dyn Clock>,
    writer: Arc<dyn ExportWriter>,
}

impl ExportLatestQueryUseCase {
    pub fn new(
        query_log: Arc<dyn QueryLogRepository>,
        stats: Arc<dyn StatsRepository>,
        clock: Arc<dyn Clock>,
        writer: Arc<dyn ExportWriter>,
    ) -> Self {
        Self {
            query_log,
            stats,
            clock,
            writer,
        }
    }

    /// Builds the document without writing it anywhere.
    pub fn build(&self) -> Result<QueryExport, DomainError> {
        let latest = self.query_log.latest().ok_or_else(|| {
            warn!("Export requested with an empty query log");
            DomainError::EmptyQueryLog
        })?;

        Ok(QueryExport::build(&latest, &self.stats.snapshot()))
    }

    pub fn execute(&self) -> Result<ExportedFile, DomainError> {
        let document = self.build()?;
        let contents = render_export(&document)?;
        let file_name = document.file_name(self.clock.now_ms());

        let path = self.writer.write(&file_name, &contents)?;
        info!(path = %path.display(), domain = %document.domain, "Query data exported");

        Ok(ExportedFile { path, document })
    }
}

/// Two-space indented JSON.
pub fn render_export(document: &QueryExport) -> Result<String, DomainError> {
    serde_json::to_string_pretty(document).map_err(|e| DomainError::SerializationError(e.to_string()))
}
