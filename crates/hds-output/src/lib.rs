//! Persistence for the silver and gold layers.
//!
//! Silver tables are written one parquet file per dataset; the gold stage
//! concatenates all of them on the canonical columns into a single file.

mod error;
mod gold;
mod layout;
mod parquet;
mod silver;

pub use error::{OutputError, Result};
pub use gold::{build_gold, merge_gold, write_gold};
pub use layout::{DataLayout, GOLD_DIR, GOLD_FILE, SILVER_DIR};
pub use parquet::{read_parquet, write_parquet};
pub use silver::{list_silver_files, read_silver, write_silver};
