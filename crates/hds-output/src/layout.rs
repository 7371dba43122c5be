//! On-disk layout of the data directory.
//!
//! ```text
//! <data>/silver/<dataset>.parquet   one validated table per dataset
//! <data>/gold/diabetes_ml.parquet   merged table for modeling
//! ```

use std::path::{Path, PathBuf};

pub const SILVER_DIR: &str = "silver";
pub const GOLD_DIR: &str = "gold";
pub const GOLD_FILE: &str = "diabetes_ml.parquet";
pub const PARQUET_EXTENSION: &str = "parquet";

#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn silver_dir(&self) -> PathBuf {
        self.root.join(SILVER_DIR)
    }

    pub fn gold_dir(&self) -> PathBuf {
        self.root.join(GOLD_DIR)
    }

    /// Silver file for a dataset key.
    pub fn silver_file(&self, dataset: &str) -> PathBuf {
        self.silver_dir()
            .join(format!("{dataset}.{PARQUET_EXTENSION}"))
    }

    pub fn gold_file(&self) -> PathBuf {
        self.gold_dir().join(GOLD_FILE)
    }
}
