//! Gold merge.

use std::path::PathBuf;

use hds_model::{SILVER_COLUMNS, SilverFrame};
use polars::prelude::DataFrame;

use crate::error::{OutputError, Result};
use crate::layout::DataLayout;
use crate::parquet::write_parquet;
use crate::silver::{list_silver_files, read_silver};

/// Concatenates silver frames on the canonical columns.
///
/// Adapter-specific extra columns are dropped since sources disagree on them.
/// Row order follows the input order.
///
/// # Errors
///
/// [`OutputError::EmptyInput`] when `frames` is empty.
pub fn merge_gold(frames: &[SilverFrame]) -> Result<DataFrame> {
    let mut iter = frames.iter();
    let Some(first) = iter.next() else {
        return Err(OutputError::EmptyInput);
    };
    let mut merged = first.data().select(SILVER_COLUMNS)?;
    for frame in iter {
        let canonical = frame.data().select(SILVER_COLUMNS)?;
        merged.vstack_mut(&canonical)?;
    }
    tracing::debug!(
        sources = frames.len(),
        rows = merged.height(),
        "merged silver tables"
    );
    Ok(merged)
}

/// Reads every silver file, merges them and writes the gold file.
///
/// Returns the gold path and the merged row count.
pub fn build_gold(layout: &DataLayout) -> Result<(PathBuf, usize)> {
    let files = list_silver_files(layout)?;
    if files.is_empty() {
        tracing::warn!(dir = %layout.silver_dir().display(), "no silver files found");
        return Err(OutputError::EmptyInput);
    }
    let frames = files
        .iter()
        .map(|path| read_silver(path))
        .collect::<Result<Vec<_>>>()?;
    let mut merged = merge_gold(&frames)?;
    let path = write_gold(layout, &mut merged)?;
    Ok((path, merged.height()))
}

/// Writes the merged table to `<data>/gold/diabetes_ml.parquet`.
pub fn write_gold(layout: &DataLayout, merged: &mut DataFrame) -> Result<PathBuf> {
    let path = layout.gold_file();
    write_parquet(merged, &path)?;
    tracing::info!(rows = merged.height(), path = %path.display(), "saved gold table");
    Ok(path)
}
