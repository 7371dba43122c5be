//! Validated canonical table.
//!
//! A [`SilverFrame`] wraps a Polars `DataFrame` that has passed schema
//! validation, together with the dataset key it came from. It only hands out
//! shared references to the data; persisting and merging work from it.

use std::path::PathBuf;

use polars::prelude::DataFrame;

use crate::schema::SILVER_COLUMNS;

/// Provenance details kept alongside a frame for logging and summaries.
#[derive(Debug, Clone, Default)]
pub struct SilverFrameMeta {
    /// Where the raw data was read from (path or URL).
    pub source_location: Option<String>,
    /// Silver file the frame was loaded from, when read back from disk.
    pub silver_file: Option<PathBuf>,
}

/// A canonical table for one dataset.
#[derive(Debug, Clone)]
pub struct SilverFrame {
    source_id: String,
    data: DataFrame,
    meta: SilverFrameMeta,
}

impl SilverFrame {
    pub fn new(source_id: impl Into<String>, data: DataFrame) -> Self {
        Self {
            source_id: source_id.into(),
            data,
            meta: SilverFrameMeta::default(),
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: SilverFrameMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Dataset key the frame was built for.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn meta(&self) -> &SilverFrameMeta {
        &self.meta
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Columns present beyond the canonical schema (adapter diagnostics).
    pub fn extra_columns(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .filter(|name| !SILVER_COLUMNS.contains(&name.as_str()))
            .map(|name| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn extra_columns_excludes_schema() {
        let df = DataFrame::new(vec![
            Series::new("age_years".into(), vec![Some(50.0)]).into_column(),
            Series::new("dpf_raw".into(), vec![Some(0.627)]).into_column(),
        ])
        .unwrap();
        let frame = SilverFrame::new("pima", df);
        assert_eq!(frame.extra_columns(), vec!["dpf_raw".to_string()]);
        assert_eq!(frame.record_count(), 1);
        assert_eq!(frame.source_id(), "pima");
    }
}
