//! The adapter contract.
//!
//! An adapter owns everything source-specific: where the raw table comes from,
//! which raw columns feed which canonical fields, and which fields record
//! "not measured" as zero. Everything else (labeling, validation, persistence)
//! is shared and runs on the canonical table the adapter produces.

use std::path::PathBuf;

use hds_model::Provenance;
use polars::prelude::DataFrame;

use crate::error::{AdapterError, Result};

/// Construction parameters for an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Local file path of the raw source.
    pub path: Option<String>,
    /// Remote (or `file://`) location of the raw source.
    pub url: Option<String>,
    /// Values stamped onto every canonical row.
    pub provenance: Provenance,
}

impl SourceDescriptor {
    pub fn new(provenance: Provenance) -> Self {
        Self {
            path: None,
            url: None,
            provenance,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Dataset key, also the `source_id` stamped on every row.
    pub fn source_id(&self) -> &str {
        &self.provenance.source_id
    }

    /// Path if set, otherwise URL; used for logs and summaries.
    pub fn location(&self) -> Option<&str> {
        self.path.as_deref().or(self.url.as_deref())
    }

    /// Returns the local path or a configuration error naming `adapter`.
    pub fn require_path(&self, adapter: &'static str) -> Result<PathBuf> {
        match self.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Err(self.missing(adapter, "path")),
        }
    }

    /// Returns the URL or a configuration error naming `adapter`.
    pub fn require_url(&self, adapter: &'static str) -> Result<&str> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(self.missing(adapter, "url")),
        }
    }

    fn missing(&self, adapter: &'static str, parameter: &str) -> AdapterError {
        AdapterError::Configuration {
            adapter,
            source_id: self.source_id().to_string(),
            message: format!("`{parameter}` is required"),
        }
    }
}

/// Source-specific loading and mapping onto the canonical schema.
///
/// Implementations must produce a frame whose leading columns are exactly the
/// canonical schema in order, with every row stamped with the descriptor's
/// provenance. Adapter-specific diagnostic columns may follow.
pub trait Adapter: Send + Sync {
    /// Registry key of this adapter (e.g. "pima").
    fn kind(&self) -> &'static str;

    fn descriptor(&self) -> &SourceDescriptor;

    /// Reads the raw source table.
    ///
    /// # Errors
    ///
    /// [`AdapterError::NotFound`] when the source is missing or unreachable.
    fn load_raw(&self) -> Result<DataFrame>;

    /// Maps a raw table onto the canonical schema.
    fn to_silver(&self, raw: &DataFrame) -> Result<DataFrame>;
}
