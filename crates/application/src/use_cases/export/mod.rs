pub mod export_latest;

pub use export_latest::{render_export, ExportLatestQueryUseCase, ExportedFile};
