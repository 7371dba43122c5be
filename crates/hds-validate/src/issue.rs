//! Schema violation types.
//!
//! Each variant carries only the data its message needs. Row indices are
//! zero-based positions in the validated table.

use std::fmt;

use hds_common::format_numeric;

/// Maximum number of offending values kept per issue.
pub const MAX_SAMPLES: usize = 5;

/// Maximum number of row indices spelled out in a message.
const MAX_ROWS_SHOWN: usize = 10;

/// One schema violation on one column.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    /// A canonical column is absent.
    MissingColumn { column: String },
    /// Values that cannot be read as the declared type.
    Coercion {
        column: String,
        expected: &'static str,
        rows: Vec<usize>,
        samples: Vec<String>,
    },
    /// Numeric values below the declared lower bound.
    BelowMinimum {
        column: String,
        minimum: f64,
        rows: Vec<usize>,
        samples: Vec<String>,
    },
    /// Values outside a closed set.
    NotInSet {
        column: String,
        allowed: Vec<String>,
        rows: Vec<usize>,
        samples: Vec<String>,
    },
    /// Missing values in a required column.
    NullNotAllowed { column: String, rows: Vec<usize> },
}

impl SchemaIssue {
    pub fn column(&self) -> &str {
        match self {
            SchemaIssue::MissingColumn { column }
            | SchemaIssue::Coercion { column, .. }
            | SchemaIssue::BelowMinimum { column, .. }
            | SchemaIssue::NotInSet { column, .. }
            | SchemaIssue::NullNotAllowed { column, .. } => column,
        }
    }

    /// Failing row indices (empty for a missing column).
    pub fn rows(&self) -> &[usize] {
        match self {
            SchemaIssue::MissingColumn { .. } => &[],
            SchemaIssue::Coercion { rows, .. }
            | SchemaIssue::BelowMinimum { rows, .. }
            | SchemaIssue::NotInSet { rows, .. }
            | SchemaIssue::NullNotAllowed { rows, .. } => rows,
        }
    }

    /// Up to [`MAX_SAMPLES`] offending values.
    pub fn samples(&self) -> &[String] {
        match self {
            SchemaIssue::MissingColumn { .. } | SchemaIssue::NullNotAllowed { .. } => &[],
            SchemaIssue::Coercion { samples, .. }
            | SchemaIssue::BelowMinimum { samples, .. }
            | SchemaIssue::NotInSet { samples, .. } => samples,
        }
    }

    /// Short machine-friendly name of the check that failed.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaIssue::MissingColumn { .. } => "missing_column",
            SchemaIssue::Coercion { .. } => "coercion",
            SchemaIssue::BelowMinimum { .. } => "below_minimum",
            SchemaIssue::NotInSet { .. } => "not_in_set",
            SchemaIssue::NullNotAllowed { .. } => "null_not_allowed",
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::MissingColumn { column } => {
                write!(f, "column `{column}` is missing")
            }
            SchemaIssue::Coercion {
                column,
                expected,
                rows,
                samples,
            } => write!(
                f,
                "column `{column}`: {} value(s) cannot be read as {expected} ({})",
                rows.len(),
                detail(rows, samples)
            ),
            SchemaIssue::BelowMinimum {
                column,
                minimum,
                rows,
                samples,
            } => write!(
                f,
                "column `{column}`: {} value(s) below minimum {} ({})",
                rows.len(),
                format_numeric(*minimum),
                detail(rows, samples)
            ),
            SchemaIssue::NotInSet {
                column,
                allowed,
                rows,
                samples,
            } => write!(
                f,
                "column `{column}`: {} value(s) not in {{{}}} ({})",
                rows.len(),
                allowed.join(", "),
                detail(rows, samples)
            ),
            SchemaIssue::NullNotAllowed { column, rows } => write!(
                f,
                "column `{column}`: {} missing value(s) in a required column (rows {})",
                rows.len(),
                format_rows(rows)
            ),
        }
    }
}

fn detail(rows: &[usize], samples: &[String]) -> String {
    format!("rows {}; samples: {}", format_rows(rows), samples.join(", "))
}

fn format_rows(rows: &[usize]) -> String {
    let mut shown: Vec<String> = rows
        .iter()
        .take(MAX_ROWS_SHOWN)
        .map(usize::to_string)
        .collect();
    if rows.len() > MAX_ROWS_SHOWN {
        shown.push("...".to_string());
    }
    shown.join(", ")
}

/// Accumulates failing rows with a capped sample list.
#[derive(Debug, Default)]
pub(crate) struct Offenders {
    pub rows: Vec<usize>,
    pub samples: Vec<String>,
}

impl Offenders {
    pub fn push(&mut self, row: usize, value: String) {
        self.rows.push(row);
        if self.samples.len() < MAX_SAMPLES {
            self.samples.push(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
