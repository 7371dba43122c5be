//! Column-by-column checks against the canonical schema.

use hds_common::{any_to_f64, any_to_i64, any_to_string_non_empty, format_numeric};
use hds_model::{FieldSpec, SILVER_COLUMNS, SemanticType, SilverFrame, silver_schema};
use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::SchemaError;
use crate::issue::{Offenders, SchemaIssue};

const FLAG_VALUES: [i64; 2] = [0, 1];

/// Outcome of checking one canonical column.
struct CheckedColumn {
    coerced: Option<Column>,
    issues: Vec<SchemaIssue>,
}

/// Returns every schema violation in `df`, in schema order.
///
/// An empty result means [`validate`] would succeed.
pub fn collect_issues(df: &DataFrame) -> Vec<SchemaIssue> {
    silver_schema()
        .iter()
        .flat_map(|spec| check_field(spec, df).issues)
        .collect()
}

/// Validates and coerces a canonical table.
///
/// Canonical columns are coerced to their declared dtypes (integers to
/// floats, numeric text to numbers, integral floats to integers, numbers to
/// text) and returned in schema order; extra columns follow unchanged. Rows
/// are never dropped.
///
/// # Errors
///
/// [`SchemaError::Invalid`] with the first violation in schema order.
pub fn validate(df: DataFrame, source_id: &str) -> Result<SilverFrame, SchemaError> {
    let mut columns = Vec::with_capacity(df.width());
    let mut issues = Vec::new();
    for spec in silver_schema() {
        let checked = check_field(spec, &df);
        issues.extend(checked.issues);
        columns.extend(checked.coerced);
    }

    if let Some(first) = issues.first() {
        for issue in &issues {
            tracing::debug!(source_id, column = issue.column(), kind = issue.kind(), "{issue}");
        }
        return Err(SchemaError::Invalid {
            source_id: source_id.to_string(),
            issue: first.clone(),
            total: issues.len(),
        });
    }

    columns.extend(
        df.get_columns()
            .iter()
            .filter(|column| !SILVER_COLUMNS.contains(&column.name().as_str()))
            .cloned(),
    );
    let data = DataFrame::new(columns)?;
    tracing::debug!(source_id, rows = data.height(), "silver table validated");
    Ok(SilverFrame::new(source_id, data))
}

fn check_field(spec: &FieldSpec, df: &DataFrame) -> CheckedColumn {
    let name = spec.name();
    let Ok(column) = df.column(name) else {
        return CheckedColumn {
            coerced: None,
            issues: vec![SchemaIssue::MissingColumn {
                column: name.to_string(),
            }],
        };
    };

    match spec.semantic {
        SemanticType::Float => check_float(spec, column),
        SemanticType::Flag | SemanticType::Integer => check_integer(spec, column),
        SemanticType::Category(_) | SemanticType::Text => check_text(spec, column),
    }
}

/// Reads every value with `convert`; blank values are missing, values that
/// fail to convert are offenders.
fn coerce<T>(
    column: &Column,
    convert: impl Fn(AnyValue<'_>) -> Option<T>,
) -> (Vec<Option<T>>, Offenders) {
    let mut values = Vec::with_capacity(column.len());
    let mut failures = Offenders::default();
    for idx in 0..column.len() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let Some(text) = any_to_string_non_empty(value.clone()) else {
            values.push(None);
            continue;
        };
        match convert(value) {
            Some(converted) => values.push(Some(converted)),
            None => {
                failures.push(idx, text.trim().to_string());
                values.push(None);
            }
        }
    }
    (values, failures)
}

fn coercion_issue(spec: &FieldSpec, failures: Offenders) -> SchemaIssue {
    SchemaIssue::Coercion {
        column: spec.name().to_string(),
        expected: spec.semantic.label(),
        rows: failures.rows,
        samples: failures.samples,
    }
}

fn null_issue<T>(spec: &FieldSpec, values: &[Option<T>]) -> Option<SchemaIssue> {
    if spec.nullable {
        return None;
    }
    let rows: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, value)| value.is_none())
        .map(|(idx, _)| idx)
        .collect();
    (!rows.is_empty()).then(|| SchemaIssue::NullNotAllowed {
        column: spec.name().to_string(),
        rows,
    })
}

fn check_float(spec: &FieldSpec, column: &Column) -> CheckedColumn {
    let (values, failures) = coerce(column, any_to_f64);
    if !failures.is_empty() {
        return CheckedColumn {
            coerced: None,
            issues: vec![coercion_issue(spec, failures)],
        };
    }
    // NaN is stored as missing, never as a value.
    let values: Vec<Option<f64>> = values
        .into_iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect();

    let mut issues: Vec<SchemaIssue> = null_issue(spec, &values).into_iter().collect();
    if let Some(minimum) = spec.minimum {
        let mut below = Offenders::default();
        for (idx, value) in values.iter().enumerate() {
            if let Some(v) = value.filter(|v| *v < minimum) {
                below.push(idx, format_numeric(v));
            }
        }
        if !below.is_empty() {
            issues.push(SchemaIssue::BelowMinimum {
                column: spec.name().to_string(),
                minimum,
                rows: below.rows,
                samples: below.samples,
            });
        }
    }

    CheckedColumn {
        coerced: Some(Series::new(spec.name().into(), values).into_column()),
        issues,
    }
}

fn check_integer(spec: &FieldSpec, column: &Column) -> CheckedColumn {
    let (values, failures) = coerce(column, any_to_i64);
    if !failures.is_empty() {
        return CheckedColumn {
            coerced: None,
            issues: vec![coercion_issue(spec, failures)],
        };
    }

    let mut issues: Vec<SchemaIssue> = null_issue(spec, &values).into_iter().collect();
    if spec.semantic == SemanticType::Flag {
        let mut outside = Offenders::default();
        for (idx, value) in values.iter().enumerate() {
            if let Some(v) = value.filter(|v| !FLAG_VALUES.contains(v)) {
                outside.push(idx, v.to_string());
            }
        }
        if !outside.is_empty() {
            issues.push(SchemaIssue::NotInSet {
                column: spec.name().to_string(),
                allowed: FLAG_VALUES.iter().map(i64::to_string).collect(),
                rows: outside.rows,
                samples: outside.samples,
            });
        }
    }

    CheckedColumn {
        coerced: Some(Series::new(spec.name().into(), values).into_column()),
        issues,
    }
}

fn check_text(spec: &FieldSpec, column: &Column) -> CheckedColumn {
    let (values, _) = coerce(column, |value| {
        any_to_string_non_empty(value).map(|s| s.trim().to_string())
    });

    let mut issues: Vec<SchemaIssue> = null_issue(spec, &values).into_iter().collect();
    if let SemanticType::Category(allowed) = spec.semantic {
        let mut outside = Offenders::default();
        for (idx, value) in values.iter().enumerate() {
            if let Some(v) = value.as_deref().filter(|v| !allowed.contains(v)) {
                outside.push(idx, v.to_string());
            }
        }
        if !outside.is_empty() {
            issues.push(SchemaIssue::NotInSet {
                column: spec.name().to_string(),
                allowed: allowed.iter().map(|v| (*v).to_string()).collect(),
                rows: outside.rows,
                samples: outside.samples,
            });
        }
    }

    CheckedColumn {
        coerced: Some(Series::new(spec.name().into(), values).into_column()),
        issues,
    }
}
