//! Generic CSV published at a URL.
//!
//! The source is expected to use canonical column names already (compared
//! case-insensitively), so the mapping is the schema itself. The one allowance
//! is fasting glucose published in mmol/L as `fpg_mmoll`.

use std::sync::Arc;

use hds_ingest::read_csv_bytes;
use hds_model::{CanonicalField, SemanticType};
use hds_transform::{SilverBuilder, glucose_mmol_to_mgdl};
use polars::prelude::DataFrame;

use crate::adapter::{Adapter, SourceDescriptor};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::sources::clean_zero_fields;

pub const KIND: &str = "http_csv";

/// Raw column carrying fasting glucose in mmol/L.
pub const FPG_MMOL_COLUMN: &str = "fpg_mmoll";

const ZERO_INVALID: &[CanonicalField] = &[
    CanonicalField::BmiKgm2,
    CanonicalField::SbpMmHg,
    CanonicalField::DbpMmHg,
    CanonicalField::FpgMgdl,
    CanonicalField::Hba1cPct,
];

pub struct HttpCsvAdapter {
    descriptor: SourceDescriptor,
    fetcher: Arc<dyn Fetcher>,
}

impl HttpCsvAdapter {
    /// Fails with a configuration error when the descriptor has no `url`.
    pub fn new(descriptor: SourceDescriptor, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        descriptor.require_url(KIND)?;
        Ok(Self {
            descriptor,
            fetcher,
        })
    }
}

impl Adapter for HttpCsvAdapter {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn load_raw(&self) -> Result<DataFrame> {
        let url = self.descriptor.require_url(KIND)?;
        tracing::debug!(url, "fetching csv source");
        let bytes = self.fetcher.fetch(url)?;
        Ok(read_csv_bytes(bytes, url)?)
    }

    fn to_silver(&self, raw: &DataFrame) -> Result<DataFrame> {
        let mut builder = SilverBuilder::new(raw, &self.descriptor.provenance);
        for field in CanonicalField::ALL {
            builder = match field.spec().semantic {
                SemanticType::Float if field == CanonicalField::FpgMgdl => {
                    if builder.has_source(field.name()) {
                        builder.float(field, field.name())?
                    } else {
                        builder.float_converted(field, FPG_MMOL_COLUMN, glucose_mmol_to_mgdl)?
                    }
                }
                SemanticType::Float => builder.float(field, field.name())?,
                SemanticType::Category(_) => builder.sex(field.name())?,
                SemanticType::Flag if field == CanonicalField::OutcomeDm => {
                    builder.outcome(field.name())?
                }
                SemanticType::Flag => builder.flag(field, field.name())?,
                // Provenance columns always come from the descriptor.
                SemanticType::Integer | SemanticType::Text => builder,
            };
        }
        clean_zero_fields(builder.finish()?, ZERO_INVALID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdapterError;
    use crate::fetch::LocalFetcher;
    use hds_model::Provenance;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn descriptor() -> SourceDescriptor {
        SourceDescriptor::new(Provenance::new("BD", 2018, "steps_bd"))
    }

    fn adapter() -> HttpCsvAdapter {
        HttpCsvAdapter::new(
            descriptor().with_url("https://example.org/steps.csv"),
            Arc::new(LocalFetcher),
        )
        .unwrap()
    }

    #[test]
    fn test_requires_url() {
        let err = HttpCsvAdapter::new(descriptor().with_path("x.csv"), Arc::new(LocalFetcher))
            .err()
            .unwrap();
        assert!(matches!(err, AdapterError::Configuration { adapter: "http_csv", .. }));
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let raw = DataFrame::new(vec![
            Series::new("AGE_YEARS".into(), vec![33.0]).into_column(),
            Series::new("Sex".into(), vec!["F"]).into_column(),
            Series::new("SBP_mmhg".into(), vec![0.0]).into_column(),
        ])
        .unwrap();
        let silver = adapter().to_silver(&raw).unwrap();
        let age = silver.column("age_years").unwrap().f64().unwrap();
        assert_eq!(age.get(0), Some(33.0));
        let sex = silver.column("sex").unwrap().str().unwrap();
        assert_eq!(sex.get(0), Some("female"));
        assert_eq!(silver.column("sbp_mmHg").unwrap().null_count(), 1);
    }

    #[test]
    fn test_glucose_in_mmol_is_converted() {
        let raw = DataFrame::new(vec![
            Series::new("fpg_mmoll".into(), vec![Some(7.0), None]).into_column(),
        ])
        .unwrap();
        let silver = adapter().to_silver(&raw).unwrap();
        let fpg = silver.column("fpg_mgdl").unwrap().f64().unwrap();
        assert_eq!(fpg.get(0), Some(126.0));
        assert_eq!(fpg.get(1), None);
    }

    #[test]
    fn test_raw_provenance_columns_are_ignored() {
        let raw = DataFrame::new(vec![
            Series::new("country".into(), vec!["XX"]).into_column(),
        ])
        .unwrap();
        let silver = adapter().to_silver(&raw).unwrap();
        let country = silver.column("country").unwrap().str().unwrap();
        assert_eq!(country.get(0), Some("BD"));
    }
}
