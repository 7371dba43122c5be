//! Configuration files for the health dataset pipeline.
//!
//! Two YAML files live in the config directory:
//!
//! - `registry.yaml`: which datasets exist and which adapter reads each one
//! - `criteria.yaml`: how `outcome_dm` is derived when a source lacks it

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod criteria;
mod error;
mod registry;

pub use criteria::load_criteria;
pub use error::{ConfigError, Result};
pub use registry::{DatasetEntry, DatasetRegistry};

/// Registry file name inside the config directory.
pub const REGISTRY_FILE: &str = "registry.yaml";

/// Criteria file name inside the config directory.
pub const CRITERIA_FILE: &str = "criteria.yaml";

/// Locations of the configuration files.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    dir: PathBuf,
}

impl ConfigPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn registry(&self) -> PathBuf {
        self.dir.join(REGISTRY_FILE)
    }

    pub fn criteria(&self) -> PathBuf {
        self.dir.join(CRITERIA_FILE)
    }
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
