//! Schema validation for canonical silver tables.
//!
//! [`validate`] is the gate between an adapter's output and persistence: it
//! coerces every canonical column to its declared dtype and enforces
//! nullability, lower bounds and closed value sets. Failures name the column,
//! the failing rows and a few sample values.
//!
//! ```ignore
//! let frame = hds_validate::validate(labeled, "pima")?;
//! ```

pub mod error;
pub mod issue;
pub mod validator;

pub use error::SchemaError;
pub use issue::{MAX_SAMPLES, SchemaIssue};
pub use validator::{collect_issues, validate};
