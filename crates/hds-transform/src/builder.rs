//! Canonical frame construction.
//!
//! [`SilverBuilder`] collects canonical columns extracted from a raw table and
//! assembles them into a frame with exactly the silver schema:
//!
//! - fields never set become typed all-missing columns (`sex` becomes `unknown`)
//! - `country`, `year` and `source_id` are always stamped from the provenance
//! - extra diagnostic columns are appended after the canonical ones
//!
//! # Example
//!
//! ```ignore
//! let silver = SilverBuilder::new(&raw, &provenance)
//!     .float(CanonicalField::AgeYears, "Age")?
//!     .sex("Gender")?
//!     .flag(CanonicalField::FamilyHistoryDm, "Family_History")?
//!     .finish()?;
//! ```

use std::collections::BTreeMap;

use hds_common::{
    any_to_i64, column_f64_values, column_text_values, find_column, is_numeric_dtype,
    is_text_dtype,
};
use hds_model::{CanonicalField, Provenance, SemanticType, Sex};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use crate::normalize::{normalize_flag, normalize_outcome_text, normalize_sex};

/// Builds a canonical silver frame from a raw source table.
pub struct SilverBuilder<'a> {
    raw: &'a DataFrame,
    provenance: &'a Provenance,
    fields: BTreeMap<CanonicalField, Column>,
    extras: Vec<Column>,
}

impl<'a> SilverBuilder<'a> {
    pub fn new(raw: &'a DataFrame, provenance: &'a Provenance) -> Self {
        Self {
            raw,
            provenance,
            fields: BTreeMap::new(),
            extras: Vec::new(),
        }
    }

    fn height(&self) -> usize {
        self.raw.height()
    }

    /// Raw column by name (exact, then case-insensitive).
    pub fn source(&self, name: &str) -> Option<&'a Column> {
        find_column(self.raw, name)
    }

    /// Whether the raw table has a column with this name.
    pub fn has_source(&self, name: &str) -> bool {
        self.source(name).is_some()
    }

    /// Sets a float field from a raw column.
    ///
    /// The raw column must be numeric-coercible. If it is absent the field is
    /// left unset and ends up all-missing.
    pub fn float(self, field: CanonicalField, source: &str) -> PolarsResult<Self> {
        debug_assert_eq!(field.spec().semantic, SemanticType::Float);
        let Some(column) = self.source(source) else {
            return Ok(self);
        };
        let values = column_f64_values(column)?;
        Ok(self.float_values(field, values))
    }

    /// Sets a float field from a raw column, converting each value.
    pub fn float_converted(
        self,
        field: CanonicalField,
        source: &str,
        convert: impl Fn(f64) -> f64,
    ) -> PolarsResult<Self> {
        let Some(column) = self.source(source) else {
            return Ok(self);
        };
        let values = column_f64_values(column)?
            .into_iter()
            .map(|value| value.map(&convert))
            .collect();
        Ok(self.float_values(field, values))
    }

    /// Sets a float field from already extracted values.
    pub fn float_values(mut self, field: CanonicalField, values: Vec<Option<f64>>) -> Self {
        let column = Series::new(field.name().into(), values).into_column();
        self.fields.insert(field, column);
        self
    }

    /// Sets `sex` from a raw column through synonym normalization.
    pub fn sex(self, source: &str) -> PolarsResult<Self> {
        let Some(column) = self.source(source) else {
            return Ok(self);
        };
        let values: Vec<&'static str> = column_text_values(column)?
            .iter()
            .map(|value| normalize_sex(value.as_deref()).as_str())
            .collect();
        Ok(self.sex_values(values))
    }

    /// Sets `sex` to the same category on every row.
    pub fn sex_constant(self, sex: Sex) -> Self {
        let values = vec![sex.as_str(); self.height()];
        self.sex_values(values)
    }

    fn sex_values(mut self, values: Vec<&'static str>) -> Self {
        let field = CanonicalField::Sex;
        let column = Series::new(field.name().into(), values).into_column();
        self.fields.insert(field, column);
        self
    }

    /// Sets a 0/1 field from a yes/no style raw column.
    ///
    /// Unrecognized tokens become missing.
    pub fn flag(self, field: CanonicalField, source: &str) -> PolarsResult<Self> {
        debug_assert_eq!(field.spec().semantic, SemanticType::Flag);
        let Some(column) = self.source(source) else {
            return Ok(self);
        };
        let values = column_text_values(column)?
            .iter()
            .map(|value| normalize_flag(value.as_deref()))
            .collect();
        Ok(self.int_values(field, values))
    }

    /// Sets `outcome_dm` from a raw outcome column.
    ///
    /// Numeric columns are taken as integers; a column holding a fractional
    /// value is kept as floats so validation reports it. Text columns are
    /// classified by the `pos` substring heuristic, with missing text counted
    /// as 0. Other dtypes (booleans) go through the yes/no normalization.
    pub fn outcome(mut self, source: &str) -> PolarsResult<Self> {
        let Some(column) = self.source(source) else {
            return Ok(self);
        };
        let field = CanonicalField::OutcomeDm;
        let values: Vec<Option<i64>> = if is_numeric_dtype(column.dtype()) {
            let numbers = column_f64_values(column)?;
            let integers: Vec<Option<i64>> = (0..column.len())
                .map(|idx| column.get(idx).map(any_to_i64))
                .collect::<PolarsResult<_>>()?;
            let fractional = numbers
                .iter()
                .zip(&integers)
                .any(|(number, integer)| number.is_some() && integer.is_none());
            if fractional {
                tracing::warn!(column = source, "non-integral outcome values kept for validation");
                let column = Series::new(field.name().into(), numbers).into_column();
                self.fields.insert(field, column);
                return Ok(self);
            }
            integers
        } else if is_text_dtype(column.dtype()) {
            column_text_values(column)?
                .iter()
                .map(|value| Some(value.as_deref().map_or(0, normalize_outcome_text)))
                .collect()
        } else {
            column_text_values(column)?
                .iter()
                .map(|value| normalize_flag(value.as_deref()))
                .collect()
        };
        Ok(self.int_values(field, values))
    }

    fn int_values(mut self, field: CanonicalField, values: Vec<Option<i64>>) -> Self {
        let column = Series::new(field.name().into(), values).into_column();
        self.fields.insert(field, column);
        self
    }

    /// Appends a float diagnostic column copied from the raw table.
    ///
    /// Absent sources produce an all-missing column so the extra column is
    /// present for every input of the same adapter.
    pub fn extra_float(mut self, name: &str, source: &str) -> PolarsResult<Self> {
        let values = match self.source(source) {
            Some(column) => column_f64_values(column)?,
            None => vec![None; self.height()],
        };
        self.extras
            .push(Series::new(name.into(), values).into_column());
        Ok(self)
    }

    /// Assembles the canonical frame.
    pub fn finish(mut self) -> PolarsResult<DataFrame> {
        let height = self.height();
        let mut columns: Vec<Column> = Vec::with_capacity(CanonicalField::ALL.len());
        for field in CanonicalField::ALL {
            let column = match field {
                CanonicalField::Country => {
                    Series::new(field.name().into(), vec![self.provenance.country.as_str(); height])
                        .into_column()
                }
                CanonicalField::Year => {
                    Series::new(field.name().into(), vec![self.provenance.year; height])
                        .into_column()
                }
                CanonicalField::SourceId => Series::new(
                    field.name().into(),
                    vec![self.provenance.source_id.as_str(); height],
                )
                .into_column(),
                CanonicalField::Sex => self.fields.remove(&field).unwrap_or_else(|| {
                    Series::new(field.name().into(), vec![Sex::Unknown.as_str(); height])
                        .into_column()
                }),
                _ => self.fields.remove(&field).unwrap_or_else(|| {
                    Column::full_null(field.name().into(), height, &field.spec().dtype())
                }),
            };
            columns.push(column);
        }
        columns.append(&mut self.extras);
        DataFrame::new(columns)
    }
}
