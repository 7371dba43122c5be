//! Error types for raw source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a raw source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source uses an encoding the CSV reader cannot handle.
    #[error("unsupported encoding {encoding} in {source_name}")]
    UnsupportedEncoding {
        source_name: String,
        encoding: &'static str,
    },

    /// Polars rejected the CSV content.
    #[error("failed to parse CSV {source_name}: {message}")]
    CsvParse { source_name: String, message: String },

    /// CSV has no header row at all.
    #[error("CSV source is empty: {source_name}")]
    EmptyCsv { source_name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
