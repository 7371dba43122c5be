//! Canonical silver schema.
//!
//! The schema is declared once here as a static table. Column order in
//! [`SILVER_COLUMNS`] is the order every canonical table is written in;
//! adapter-specific diagnostic columns are appended after it.

use std::fmt;

use polars::prelude::DataType;

use crate::sex::Sex;

/// A column of the canonical silver schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    AgeYears,
    Sex,
    BmiKgm2,
    SbpMmHg,
    DbpMmHg,
    FpgMgdl,
    Hba1cPct,
    InsulinUiuMl,
    SkinfoldTricepsMm,
    FamilyHistoryDm,
    OutcomeDm,
    Country,
    Year,
    SourceId,
}

impl CanonicalField {
    /// All canonical fields in schema order.
    pub const ALL: [CanonicalField; 14] = [
        CanonicalField::AgeYears,
        CanonicalField::Sex,
        CanonicalField::BmiKgm2,
        CanonicalField::SbpMmHg,
        CanonicalField::DbpMmHg,
        CanonicalField::FpgMgdl,
        CanonicalField::Hba1cPct,
        CanonicalField::InsulinUiuMl,
        CanonicalField::SkinfoldTricepsMm,
        CanonicalField::FamilyHistoryDm,
        CanonicalField::OutcomeDm,
        CanonicalField::Country,
        CanonicalField::Year,
        CanonicalField::SourceId,
    ];

    /// Column name as persisted.
    pub fn name(self) -> &'static str {
        match self {
            CanonicalField::AgeYears => "age_years",
            CanonicalField::Sex => "sex",
            CanonicalField::BmiKgm2 => "bmi_kgm2",
            CanonicalField::SbpMmHg => "sbp_mmHg",
            CanonicalField::DbpMmHg => "dbp_mmHg",
            CanonicalField::FpgMgdl => "fpg_mgdl",
            CanonicalField::Hba1cPct => "hba1c_pct",
            CanonicalField::InsulinUiuMl => "insulin_uIUml",
            CanonicalField::SkinfoldTricepsMm => "skinfold_triceps_mm",
            CanonicalField::FamilyHistoryDm => "family_history_dm",
            CanonicalField::OutcomeDm => "outcome_dm",
            CanonicalField::Country => "country",
            CanonicalField::Year => "year",
            CanonicalField::SourceId => "source_id",
        }
    }

    /// The field's schema entry.
    pub fn spec(self) -> &'static FieldSpec {
        field_spec(self)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column names of the canonical schema in schema order.
pub const SILVER_COLUMNS: [&str; 14] = [
    "age_years",
    "sex",
    "bmi_kgm2",
    "sbp_mmHg",
    "dbp_mmHg",
    "fpg_mgdl",
    "hba1c_pct",
    "insulin_uIUml",
    "skinfold_triceps_mm",
    "family_history_dm",
    "outcome_dm",
    "country",
    "year",
    "source_id",
];

/// Semantic type of a canonical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Continuous measurement, stored as Float64.
    Float,
    /// Closed category stored as text; the slice lists the allowed values.
    Category(&'static [&'static str]),
    /// 0/1 indicator stored as Int64.
    Flag,
    /// Whole number stored as Int64.
    Integer,
    /// Free text stored as String.
    Text,
}

impl SemanticType {
    /// Polars dtype a validated column is coerced to.
    pub fn dtype(self) -> DataType {
        match self {
            SemanticType::Float => DataType::Float64,
            SemanticType::Category(_) | SemanticType::Text => DataType::String,
            SemanticType::Flag | SemanticType::Integer => DataType::Int64,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SemanticType::Float => "float",
            SemanticType::Category(_) => "category",
            SemanticType::Flag => "0/1 integer",
            SemanticType::Integer => "integer",
            SemanticType::Text => "string",
        }
    }
}

/// Schema entry for one canonical column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: CanonicalField,
    pub semantic: SemanticType,
    /// Whether missing values are allowed.
    pub nullable: bool,
    /// Inclusive lower bound for non-missing numeric values.
    pub minimum: Option<f64>,
}

impl FieldSpec {
    const fn new(
        field: CanonicalField,
        semantic: SemanticType,
        nullable: bool,
        minimum: Option<f64>,
    ) -> Self {
        Self {
            field,
            semantic,
            nullable,
            minimum,
        }
    }

    pub fn name(&self) -> &'static str {
        self.field.name()
    }

    pub fn dtype(&self) -> DataType {
        self.semantic.dtype()
    }
}

const SILVER_SCHEMA: [FieldSpec; 14] = [
    FieldSpec::new(CanonicalField::AgeYears, SemanticType::Float, true, Some(0.0)),
    FieldSpec::new(CanonicalField::Sex, SemanticType::Category(Sex::VALUES), true, None),
    FieldSpec::new(CanonicalField::BmiKgm2, SemanticType::Float, true, Some(5.0)),
    FieldSpec::new(CanonicalField::SbpMmHg, SemanticType::Float, true, Some(40.0)),
    FieldSpec::new(CanonicalField::DbpMmHg, SemanticType::Float, true, Some(20.0)),
    FieldSpec::new(CanonicalField::FpgMgdl, SemanticType::Float, true, Some(20.0)),
    FieldSpec::new(CanonicalField::Hba1cPct, SemanticType::Float, true, Some(3.0)),
    FieldSpec::new(CanonicalField::InsulinUiuMl, SemanticType::Float, true, Some(0.0)),
    FieldSpec::new(CanonicalField::SkinfoldTricepsMm, SemanticType::Float, true, Some(0.0)),
    FieldSpec::new(CanonicalField::FamilyHistoryDm, SemanticType::Flag, true, None),
    FieldSpec::new(CanonicalField::OutcomeDm, SemanticType::Flag, true, None),
    FieldSpec::new(CanonicalField::Country, SemanticType::Text, false, None),
    FieldSpec::new(CanonicalField::Year, SemanticType::Integer, false, None),
    FieldSpec::new(CanonicalField::SourceId, SemanticType::Text, false, None),
];

/// The full canonical schema in column order.
pub fn silver_schema() -> &'static [FieldSpec] {
    &SILVER_SCHEMA
}

/// Schema entry for a single field.
pub fn field_spec(field: CanonicalField) -> &'static FieldSpec {
    // SILVER_SCHEMA is declared in CanonicalField::ALL order.
    &SILVER_SCHEMA[field as usize]
}
