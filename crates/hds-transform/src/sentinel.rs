//! Zero-as-missing cleaning.
//!
//! Several sources record "not measured" as a literal `0` in columns where
//! zero is physiologically impossible (blood pressure, glucose, BMI). Which
//! columns get cleaned is decided by each adapter, not globally.

use hds_common::column_f64_values;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

/// Returns a copy of `df` where values exactly equal to zero in `columns`
/// are replaced by missing.
///
/// Columns not present in `df` are skipped. Cleaned columns come back as
/// Float64; every other value passes through unchanged.
///
/// # Errors
///
/// Each named column must be numeric-coercible. A text column that does not
/// parse as numbers fails with the Polars cast error.
pub fn clean_zero_as_missing(df: &DataFrame, columns: &[&str]) -> PolarsResult<DataFrame> {
    let mut cleaned = df.clone();
    for &name in columns {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let values = column_f64_values(column)?;
        let mut zero_count = 0usize;
        let values: Vec<Option<f64>> = values
            .into_iter()
            .map(|value| match value {
                Some(v) if v == 0.0 => {
                    zero_count += 1;
                    None
                }
                other => other,
            })
            .collect();
        if zero_count > 0 {
            tracing::debug!(column = name, zero_count, "zero sentinels set to missing");
        }
        cleaned.with_column(Series::new(name.into(), values).into_column())?;
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glucose_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("fpg_mgdl".into(), vec![Some(0.0), Some(85.0), None]).into_column(),
            Series::new("age_years".into(), vec![Some(0.0), Some(31.0), Some(50.0)]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn zero_becomes_missing() {
        let df = glucose_frame();
        let cleaned = clean_zero_as_missing(&df, &["fpg_mgdl"]).unwrap();
        let fpg = cleaned.column("fpg_mgdl").unwrap().f64().unwrap();
        assert_eq!(fpg.get(0), None);
        assert_eq!(fpg.get(1), Some(85.0));
        assert_eq!(fpg.get(2), None);
    }

    #[test]
    fn undeclared_columns_keep_zero() {
        let df = glucose_frame();
        let cleaned = clean_zero_as_missing(&df, &["fpg_mgdl"]).unwrap();
        let age = cleaned.column("age_years").unwrap().f64().unwrap();
        assert_eq!(age.get(0), Some(0.0));
    }

    #[test]
    fn caller_frame_is_untouched() {
        let df = glucose_frame();
        let _ = clean_zero_as_missing(&df, &["fpg_mgdl"]).unwrap();
        let fpg = df.column("fpg_mgdl").unwrap().f64().unwrap();
        assert_eq!(fpg.get(0), Some(0.0));
    }

    #[test]
    fn absent_columns_are_skipped() {
        let df = glucose_frame();
        let cleaned = clean_zero_as_missing(&df, &["insulin_uIUml"]).unwrap();
        assert!(cleaned.equals_missing(&df));
    }

    #[test]
    fn integer_columns_are_cleaned_as_float() {
        let df = DataFrame::new(vec![
            Series::new("Glucose".into(), vec![0i64, 85]).into_column(),
        ])
        .unwrap();
        let cleaned = clean_zero_as_missing(&df, &["Glucose"]).unwrap();
        let glucose = cleaned.column("Glucose").unwrap().f64().unwrap();
        assert_eq!(glucose.get(0), None);
        assert_eq!(glucose.get(1), Some(85.0));
    }

    #[test]
    fn non_numeric_column_fails_fast() {
        let df = DataFrame::new(vec![
            Series::new("Glucose".into(), vec!["high", "85"]).into_column(),
        ])
        .unwrap();
        assert!(clean_zero_as_missing(&df, &["Glucose"]).is_err());
    }
}
