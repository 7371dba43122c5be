//! Silver table persistence.

use std::fs;
use std::path::{Path, PathBuf};

use hds_model::{SilverFrame, SilverFrameMeta};

use crate::error::{OutputError, Result};
use crate::layout::{DataLayout, PARQUET_EXTENSION};
use crate::parquet::{read_parquet, write_parquet};

/// Writes a validated frame to `<data>/silver/<source_id>.parquet`.
///
/// An existing file for the same dataset is replaced.
pub fn write_silver(layout: &DataLayout, frame: &SilverFrame) -> Result<PathBuf> {
    let path = layout.silver_file(frame.source_id());
    let mut data = frame.data().clone();
    write_parquet(&mut data, &path)?;
    tracing::info!(
        dataset = frame.source_id(),
        rows = frame.record_count(),
        path = %path.display(),
        "saved silver table"
    );
    Ok(path)
}

/// Lists silver parquet files in name order; a missing directory is empty.
pub fn list_silver_files(layout: &DataLayout) -> Result<Vec<PathBuf>> {
    let dir = layout.silver_dir();
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(OutputError::Io { path: dir, source }),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| OutputError::Io {
                path: dir.clone(),
                source,
            })?
            .path();
        let is_parquet = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PARQUET_EXTENSION));
        if path.is_file() && is_parquet {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads a silver file back; the dataset key is taken from the file stem.
pub fn read_silver(path: &Path) -> Result<SilverFrame> {
    let data = read_parquet(path)?;
    let source_id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let meta = SilverFrameMeta {
        source_location: None,
        silver_file: Some(path.to_path_buf()),
    };
    Ok(SilverFrame::new(source_id, data).with_meta(meta))
}
