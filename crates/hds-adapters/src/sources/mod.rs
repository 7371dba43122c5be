//! Built-in source adapters.
//!
//! Each module holds one adapter and its registry key. Field mappings are
//! static tables so they can be read at a glance.

pub mod http_csv;
pub mod indians;
pub mod nhanes;
pub mod pima;

pub use http_csv::HttpCsvAdapter;
pub use indians::IndiansAdapter;
pub use nhanes::NhanesAdapter;
pub use pima::PimaAdapter;

use hds_model::CanonicalField;
use hds_transform::clean_zero_as_missing;
use polars::prelude::DataFrame;

use crate::error::Result;

/// Applies zero-as-missing cleaning to canonical fields of a built frame.
pub(crate) fn clean_zero_fields(df: DataFrame, fields: &[CanonicalField]) -> Result<DataFrame> {
    let names: Vec<&str> = fields.iter().map(|field| field.name()).collect();
    Ok(clean_zero_as_missing(&df, &names)?)
}
