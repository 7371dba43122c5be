//! Indian diabetes survey dataset.

use std::path::Path;

use hds_ingest::read_csv_table;
use hds_model::CanonicalField;
use hds_transform::SilverBuilder;
use polars::prelude::DataFrame;

use crate::adapter::{Adapter, SourceDescriptor};
use crate::error::Result;
use crate::sources::clean_zero_fields;

pub const KIND: &str = "indians";

const ZERO_INVALID: &[CanonicalField] = &[
    CanonicalField::FpgMgdl,
    CanonicalField::Hba1cPct,
    CanonicalField::BmiKgm2,
];

/// Survey extract with demographics, fasting glucose and HbA1c.
///
/// Blood pressure, insulin and skinfold are not collected. Family history and
/// diabetes status are yes/no answers.
pub struct IndiansAdapter {
    descriptor: SourceDescriptor,
}

impl IndiansAdapter {
    pub fn new(descriptor: SourceDescriptor) -> Result<Self> {
        descriptor.require_path(KIND)?;
        Ok(Self { descriptor })
    }
}

impl Adapter for IndiansAdapter {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn load_raw(&self) -> Result<DataFrame> {
        let path = self.descriptor.require_path(KIND)?;
        Ok(read_csv_table(Path::new(&path))?)
    }

    fn to_silver(&self, raw: &DataFrame) -> Result<DataFrame> {
        let df = SilverBuilder::new(raw, &self.descriptor.provenance)
            .float(CanonicalField::AgeYears, "Age")?
            .sex("Gender")?
            .float(CanonicalField::BmiKgm2, "BMI")?
            .float(CanonicalField::FpgMgdl, "Fasting_Blood_Sugar")?
            .float(CanonicalField::Hba1cPct, "HBA1C")?
            .flag(CanonicalField::FamilyHistoryDm, "Family_History")?
            .flag(CanonicalField::OutcomeDm, "Diabetes_Status")?
            .finish()?;
        clean_zero_fields(df, ZERO_INVALID)
    }
}
