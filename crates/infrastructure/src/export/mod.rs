pub mod json_file_writer;

pub use json_file_writer::JsonFileExportWriter;
