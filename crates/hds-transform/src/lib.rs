//! Canonical table transformations.
//!
//! Building blocks the source adapters compose to turn a raw table into the
//! canonical silver layout, plus the post-adapter label derivation step.
//!
//! # Overview
//!
//! - [`builder`]: [`SilverBuilder`] assembles canonical columns from raw ones,
//!   filling absent fields with typed all-missing columns and stamping provenance
//! - [`normalize`]: sex, yes/no and outcome-label normalization
//! - [`sentinel`]: zero-as-missing cleaning for biologically impossible zeros
//! - [`units`]: glucose and HbA1c unit conversions
//! - [`labeling`]: threshold-based `outcome_dm` derivation
//!
//! All functions return new frames; the caller's frame is never mutated.

pub mod builder;
pub mod labeling;
pub mod normalize;
pub mod sentinel;
pub mod units;

pub use builder::SilverBuilder;
pub use labeling::apply_labels;
pub use normalize::{normalize_flag, normalize_outcome_text, normalize_sex};
pub use sentinel::clean_zero_as_missing;
pub use units::{GLUCOSE_MGDL_PER_MMOL, glucose_mmol_to_mgdl};
