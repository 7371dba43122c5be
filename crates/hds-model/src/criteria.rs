//! Outcome label derivation criteria.
//!
//! Loaded from `config/criteria.yaml`:
//!
//! ```yaml
//! use_label_if_present: true
//! derive_rules:
//!   use_fpg: true
//!   fpg_diabetes_mgdl: 126
//!   use_hba1c: true
//!   hba1c_diabetes_pct: 6.5
//! ```

use serde::{Deserialize, Serialize};

/// Diagnostic fasting plasma glucose cutoff (mg/dL).
pub const DEFAULT_FPG_DIABETES_MGDL: f64 = 126.0;

/// Diagnostic HbA1c cutoff (%).
pub const DEFAULT_HBA1C_DIABETES_PCT: f64 = 6.5;

/// Controls whether and how `outcome_dm` is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCriteria {
    /// Keep a source-provided outcome when it has at least one value.
    #[serde(default = "default_true")]
    pub use_label_if_present: bool,
    #[serde(default)]
    pub derive_rules: DeriveRules,
}

impl Default for LabelCriteria {
    fn default() -> Self {
        Self {
            use_label_if_present: true,
            derive_rules: DeriveRules::default(),
        }
    }
}

/// Threshold rules; a row is positive when any enabled rule holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeriveRules {
    #[serde(default)]
    pub use_fpg: bool,
    #[serde(default = "default_fpg_cutoff")]
    pub fpg_diabetes_mgdl: f64,
    #[serde(default)]
    pub use_hba1c: bool,
    #[serde(default = "default_hba1c_cutoff")]
    pub hba1c_diabetes_pct: f64,
}

impl Default for DeriveRules {
    fn default() -> Self {
        Self {
            use_fpg: false,
            fpg_diabetes_mgdl: DEFAULT_FPG_DIABETES_MGDL,
            use_hba1c: false,
            hba1c_diabetes_pct: DEFAULT_HBA1C_DIABETES_PCT,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fpg_cutoff() -> f64 {
    DEFAULT_FPG_DIABETES_MGDL
}

fn default_hba1c_cutoff() -> f64 {
    DEFAULT_HBA1C_DIABETES_PCT
}
