//! Dataset registry (`config/registry.yaml`).
//!
//! ```yaml
//! datasets:
//!   pima:
//!     adapter: pima
//!     path: data/bronze/pima.csv
//!     country: US
//!     year: 1990
//!   steps_bd:
//!     adapter: http_csv
//!     url: https://example.org/steps_bd.csv
//!     country: BD
//!     year: 2018
//! ```
//!
//! The key of each entry becomes the `source_id` of its rows.

use std::collections::BTreeMap;
use std::path::Path;

use hds_adapters::SourceDescriptor;
use hds_model::Provenance;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::load_yaml;

/// One registered dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Adapter key (e.g. `pima`, `http_csv`).
    pub adapter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub country: String,
    pub year: i64,
}

impl DatasetEntry {
    /// Builds the adapter descriptor for this entry registered under `key`.
    pub fn descriptor(&self, key: &str) -> SourceDescriptor {
        SourceDescriptor {
            path: self.path.clone(),
            url: self.url.clone(),
            provenance: Provenance::new(self.country.clone(), self.year, key),
        }
    }

    /// Path if set, otherwise URL.
    pub fn location(&self) -> Option<&str> {
        self.path.as_deref().or(self.url.as_deref())
    }
}

/// All registered datasets keyed by dataset key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRegistry {
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetEntry>,
}

impl DatasetRegistry {
    /// Reads a registry file.
    pub fn load(path: &Path) -> Result<Self> {
        let registry: Self = load_yaml(path)?;
        tracing::debug!(
            path = %path.display(),
            datasets = registry.datasets.len(),
            "loaded dataset registry"
        );
        Ok(registry)
    }

    /// Looks up a dataset by key.
    pub fn get(&self, key: &str) -> Result<&DatasetEntry> {
        self.datasets
            .get(key)
            .ok_or_else(|| ConfigError::UnknownDataset {
                key: key.to_string(),
                known: self.keys().join(", "),
            })
    }

    /// Dataset keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.datasets.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DatasetEntry)> {
        self.datasets
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = "\
datasets:
  pima:
    adapter: pima
    path: data/bronze/pima.csv
    country: US
    year: 1990
  steps_bd:
    adapter: http_csv
    url: https://example.org/steps_bd.csv
    country: BD
    year: 2018
";

    fn registry() -> DatasetRegistry {
        serde_yaml::from_str(REGISTRY).unwrap()
    }

    #[test]
    fn test_parse_entries() {
        let registry = registry();
        assert_eq!(registry.keys(), vec!["pima", "steps_bd"]);
        let steps = registry.get("steps_bd").unwrap();
        assert_eq!(steps.adapter, "http_csv");
        assert_eq!(steps.path, None);
        assert_eq!(steps.location(), Some("https://example.org/steps_bd.csv"));
    }

    #[test]
    fn test_descriptor_uses_key_as_source_id() {
        let registry = registry();
        let descriptor = registry.get("pima").unwrap().descriptor("pima");
        assert_eq!(descriptor.provenance, Provenance::new("US", 1990, "pima"));
        assert_eq!(descriptor.path.as_deref(), Some("data/bronze/pima.csv"));
    }

    #[test]
    fn test_unknown_dataset_lists_known_keys() {
        let err = registry().get("nhanes").unwrap_err();
        assert_eq!(
            err.to_string(),
            "dataset `nhanes` is not in the registry (known: pima, steps_bd)"
        );
    }
}
