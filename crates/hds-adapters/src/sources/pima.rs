//! Pima Indians diabetes dataset.
//!
//! The CSV circulates with two header styles: the long names used by most
//! mirrors (`Glucose`, `BloodPressure`, ...) and the short ARFF-derived names
//! (`plas`, `pres`, ...). Short names are renamed first, then mapped.

use std::path::Path;

use hds_ingest::read_csv_table;
use hds_model::{CanonicalField, Sex};
use hds_transform::SilverBuilder;
use polars::prelude::DataFrame;

use crate::adapter::{Adapter, SourceDescriptor};
use crate::error::Result;
use crate::sources::clean_zero_fields;

pub const KIND: &str = "pima";

/// Short header name to long header name.
const RENAMES: &[(&str, &str)] = &[
    ("preg", "Pregnancies"),
    ("plas", "Glucose"),
    ("pres", "BloodPressure"),
    ("skin", "SkinThickness"),
    ("insu", "Insulin"),
    ("mass", "BMI"),
    ("pedi", "DiabetesPedigreeFunction"),
    ("age", "Age"),
    ("class", "Outcome"),
];

/// Canonical fields where zero means "not measured".
const ZERO_INVALID: &[CanonicalField] = &[
    CanonicalField::FpgMgdl,
    CanonicalField::DbpMmHg,
    CanonicalField::SkinfoldTricepsMm,
    CanonicalField::InsulinUiuMl,
    CanonicalField::BmiKgm2,
];

/// Name of the diagnostic column carrying the pedigree function.
pub const DPF_COLUMN: &str = "dpf_raw";

pub struct PimaAdapter {
    descriptor: SourceDescriptor,
}

impl PimaAdapter {
    pub fn new(descriptor: SourceDescriptor) -> Result<Self> {
        descriptor.require_path(KIND)?;
        Ok(Self { descriptor })
    }
}

impl Adapter for PimaAdapter {
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
        let raw = rename_short_headers(raw)?;
        // Blood pressure in this dataset is diastolic only.
        let df = SilverBuilder::new(&raw, &self.descriptor.provenance)
            .float(CanonicalField::AgeYears, "Age")?
            .sex_constant(Sex::Unknown)
            .float(CanonicalField::BmiKgm2, "BMI")?
            .float(CanonicalField::DbpMmHg, "BloodPressure")?
            .float(CanonicalField::FpgMgdl, "Glucose")?
            .float(CanonicalField::InsulinUiuMl, "Insulin")?
            .float(CanonicalField::SkinfoldTricepsMm, "SkinThickness")?
            .outcome("Outcome")?
            .extra_float(DPF_COLUMN, "DiabetesPedigreeFunction")?
            .finish()?;
        clean_zero_fields(df, ZERO_INVALID)
    }
}

fn rename_short_headers(raw: &DataFrame) -> Result<DataFrame> {
    let mut df = raw.clone();
    for &(short, long) in RENAMES {
        let present = df.get_column_names_str().contains(&short);
        let taken = df.get_column_names_str().contains(&long);
        if present && !taken {
            df.rename(short, long.into())?;
        }
    }
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hds_model::Provenance;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn adapter() -> PimaAdapter {
        let descriptor = SourceDescriptor::new(Provenance::new("US", 1990, "pima"))
            .with_path("data/bronze/pima.csv");
        PimaAdapter::new(descriptor).unwrap()
    }

    #[test]
    fn test_short_headers_are_renamed() {
        let raw = DataFrame::new(vec![
            Series::new("plas".into(), vec![148i64]).into_column(),
            Series::new("mass".into(), vec![33.6]).into_column(),
        ])
        .unwrap();
        let renamed = rename_short_headers(&raw).unwrap();
        assert_eq!(renamed.get_column_names_str(), vec!["Glucose", "BMI"]);
    }

    #[test]
    fn test_long_header_wins_over_short() {
        let raw = DataFrame::new(vec![
            Series::new("age".into(), vec![1i64]).into_column(),
            Series::new("Age".into(), vec![50i64]).into_column(),
        ])
        .unwrap();
        let renamed = rename_short_headers(&raw).unwrap();
        assert_eq!(renamed.get_column_names_str(), vec!["age", "Age"]);
    }

    #[test]
    fn test_sex_is_unknown_and_labs_missing() {
        let raw = DataFrame::new(vec![
            Series::new("Glucose".into(), vec![148i64, 0]).into_column(),
            Series::new("Outcome".into(), vec![1i64, 0]).into_column(),
        ])
        .unwrap();
        let silver = adapter().to_silver(&raw).unwrap();

        let sex = silver.column("sex").unwrap().str().unwrap();
        assert_eq!(sex.get(0), Some("unknown"));
        assert_eq!(silver.column("hba1c_pct").unwrap().null_count(), 2);
        assert_eq!(silver.column("sbp_mmHg").unwrap().null_count(), 2);

        let fpg = silver.column("fpg_mgdl").unwrap().f64().unwrap();
        assert_eq!(fpg.get(0), Some(148.0));
        assert_eq!(fpg.get(1), None);
    }

    #[test]
    fn test_requires_path() {
        let descriptor = SourceDescriptor::new(Provenance::new("US", 1990, "pima"));
        assert!(PimaAdapter::new(descriptor).is_err());
    }
}
