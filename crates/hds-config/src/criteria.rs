//! Label criteria (`config/criteria.yaml`).

use std::path::Path;

use hds_model::LabelCriteria;

use crate::error::Result;
use crate::load_yaml;

/// Reads label criteria; keys left out of the file take their defaults.
pub fn load_criteria(path: &Path) -> Result<LabelCriteria> {
    let criteria: LabelCriteria = load_yaml(path)?;
    tracing::debug!(
        path = %path.display(),
        use_label_if_present = criteria.use_label_if_present,
        use_fpg = criteria.derive_rules.use_fpg,
        use_hba1c = criteria.derive_rules.use_hba1c,
        "loaded label criteria"
    );
    Ok(criteria)
}
