//! Canonical ("silver") data model for harmonized health datasets.
//!
//! Every source adapter produces a table with exactly the columns declared in
//! [`schema`], whatever the raw layout looked like. The types here are shared
//! by the adapters, the label deriver, the validator and the output stage.
//!
//! # Module Organization
//!
//! - [`schema`]: canonical fields, their semantic types and constraints
//! - [`sex`]: the closed sex category and its synonym normalization
//! - [`frame`]: [`SilverFrame`], a canonical table tagged with its source
//! - [`criteria`]: label derivation criteria
//! - [`provenance`]: country/year/source stamping values

pub mod criteria;
pub mod frame;
pub mod provenance;
pub mod schema;
pub mod sex;

pub use criteria::{DeriveRules, LabelCriteria};
pub use frame::{SilverFrame, SilverFrameMeta};
pub use provenance::Provenance;
pub use schema::{
    CanonicalField, FieldSpec, SILVER_COLUMNS, SemanticType, field_spec, silver_schema,
};
pub use sex::Sex;
