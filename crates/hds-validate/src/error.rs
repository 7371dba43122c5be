//! Validation error type.

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::issue::SchemaIssue;

/// Returned when a canonical table does not satisfy the silver schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The first violation in schema order; `total` counts all of them.
    #[error("schema validation failed for `{source_id}`: {issue}")]
    Invalid {
        source_id: String,
        issue: SchemaIssue,
        total: usize,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl SchemaError {
    /// The violation that failed validation, if any.
    pub fn issue(&self) -> Option<&SchemaIssue> {
        match self {
            SchemaError::Invalid { issue, .. } => Some(issue),
            SchemaError::Polars(_) => None,
        }
    }

    /// Column named by the violation.
    pub fn column(&self) -> Option<&str> {
        self.issue().map(SchemaIssue::column)
    }
}
