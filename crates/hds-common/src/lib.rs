//! Shared utilities for the health dataset silver pipeline crates.
//!
//! Everything here works on Polars values and columns without knowing anything
//! about the canonical schema, so it can be used by ingestion, adapters and the
//! validator alike.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, column_f64_values,
    column_text_values, find_column, format_numeric, is_numeric_dtype, is_text_dtype, parse_f64,
    parse_i64,
};
