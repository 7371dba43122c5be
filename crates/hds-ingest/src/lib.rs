//! Raw source ingestion.
//!
//! Reads source CSV data into untyped Polars DataFrames. Column names and
//! dtypes are whatever the source provides; mapping them onto the canonical
//! schema is the adapters' job.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hds_ingest::read_csv_table;
//!
//! let raw = read_csv_table(Path::new("data/bronze/pima.csv"))?;
//! println!("{} rows, {} columns", raw.height(), raw.width());
//! ```

mod csv;
mod error;

pub use csv::{MISSING_TOKENS, read_csv_bytes, read_csv_table, validate_encoding};
pub use error::{IngestError, Result};
