//! Adapter error types.

use hds_ingest::IngestError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while constructing or running an adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A required construction parameter is missing or unusable.
    #[error("adapter `{adapter}` for `{source_id}` is misconfigured: {message}")]
    Configuration {
        adapter: &'static str,
        source_id: String,
        message: String,
    },

    /// The source location does not exist or cannot be reached.
    #[error("source not found: {location}")]
    NotFound { location: String },

    /// The operation is a placeholder that is not wired up yet.
    #[error("{operation} is not implemented by `{component}`")]
    Unimplemented {
        component: &'static str,
        operation: &'static str,
    },

    /// No adapter is registered under this key.
    #[error("unknown adapter `{0}`")]
    UnknownAdapter(String),

    /// Fetching remote content failed.
    #[error("failed to fetch {location}: {message}")]
    Fetch { location: String, message: String },

    #[error(transparent)]
    Ingest(IngestError),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl From<IngestError> for AdapterError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::FileNotFound { path } => AdapterError::NotFound {
                location: path.display().to_string(),
            },
            other => AdapterError::Ingest(other),
        }
    }
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
