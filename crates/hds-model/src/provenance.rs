//! Provenance values stamped onto every canonical row.

use serde::{Deserialize, Serialize};

/// Origin of a dataset: where and when it was collected, and which registry
/// entry produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub country: String,
    pub year: i64,
    pub source_id: String,
}

impl Provenance {
    pub fn new(country: impl Into<String>, year: i64, source_id: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            year,
            source_id: source_id.into(),
        }
    }
}
