//! Outcome label derivation.
//!
//! Runs after an adapter and before validation. Sources that carry their own
//! diabetes outcome keep it (unless configured otherwise); for the rest the
//! label is derived from lab thresholds.

use hds_common::column_f64_values;
use hds_model::{CanonicalField, LabelCriteria};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

/// Fills `outcome_dm` from the criteria's threshold rules.
///
/// If `use_label_if_present` is set and `outcome_dm` already has at least one
/// non-missing value, the frame is returned unchanged. Otherwise each row is 1
/// when any enabled rule holds (`fpg_mgdl >= cutoff`, `hba1c_pct >= cutoff`)
/// and 0 otherwise. Rows with missing lab values, or frames lacking the lab
/// column, count as 0: this does not distinguish a confirmed negative from
/// insufficient data.
pub fn apply_labels(df: DataFrame, criteria: &LabelCriteria) -> PolarsResult<DataFrame> {
    let outcome_name = CanonicalField::OutcomeDm.name();
    if criteria.use_label_if_present && has_any_label(&df) {
        tracing::debug!("keeping source-provided outcome labels");
        return Ok(df);
    }

    let rules = &criteria.derive_rules;
    let mut outcome = vec![0i64; df.height()];
    if rules.use_fpg {
        mark_at_or_above(&df, CanonicalField::FpgMgdl, rules.fpg_diabetes_mgdl, &mut outcome)?;
    }
    if rules.use_hba1c {
        mark_at_or_above(
            &df,
            CanonicalField::Hba1cPct,
            rules.hba1c_diabetes_pct,
            &mut outcome,
        )?;
    }

    let positives = outcome.iter().filter(|&&value| value == 1).count();
    tracing::info!(
        rows = outcome.len(),
        positives,
        use_fpg = rules.use_fpg,
        use_hba1c = rules.use_hba1c,
        "derived outcome labels"
    );

    let mut df = df;
    df.with_column(Series::new(outcome_name.into(), outcome).into_column())?;
    Ok(df)
}

fn has_any_label(df: &DataFrame) -> bool {
    df.column(CanonicalField::OutcomeDm.name())
        .map(|column| column.null_count() < column.len())
        .unwrap_or(false)
}

fn mark_at_or_above(
    df: &DataFrame,
    field: CanonicalField,
    cutoff: f64,
    outcome: &mut [i64],
) -> PolarsResult<()> {
    let Ok(column) = df.column(field.name()) else {
        return Ok(());
    };
    for (slot, value) in outcome.iter_mut().zip(column_f64_values(column)?) {
        if value.is_some_and(|v| v >= cutoff) {
            *slot = 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hds_model::DeriveRules;

    fn labs(fpg: Vec<Option<f64>>, hba1c: Vec<Option<f64>>, outcome: Vec<Option<i64>>) -> DataFrame {
        DataFrame::new(vec![
            Series::new("fpg_mgdl".into(), fpg).into_column(),
            Series::new("hba1c_pct".into(), hba1c).into_column(),
            Series::new("outcome_dm".into(), outcome).into_column(),
        ])
        .unwrap()
    }

    fn criteria(use_fpg: bool, use_hba1c: bool) -> LabelCriteria {
        LabelCriteria {
            use_label_if_present: true,
            derive_rules: DeriveRules {
                use_fpg,
                fpg_diabetes_mgdl: 126.0,
                use_hba1c,
                hba1c_diabetes_pct: 6.5,
            },
        }
    }

    fn outcome(df: &DataFrame) -> Vec<Option<i64>> {
        df.column("outcome_dm")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn existing_labels_short_circuit() {
        let df = labs(vec![Some(200.0), None], vec![None, None], vec![Some(0), None]);
        let labeled = apply_labels(df.clone(), &criteria(true, true)).unwrap();
        assert!(labeled.equals_missing(&df));
    }

    #[test]
    fn existing_labels_ignored_when_disabled() {
        let df = labs(vec![Some(200.0)], vec![None], vec![Some(0)]);
        let mut criteria = criteria(true, false);
        criteria.use_label_if_present = false;
        let labeled = apply_labels(df, &criteria).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(1)]);
    }

    #[test]
    fn fpg_alone_triggers_when_hba1c_rule_disabled() {
        let df = labs(vec![Some(130.0)], vec![Some(5.0)], vec![None]);
        let labeled = apply_labels(df, &criteria(true, false)).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(1)]);
    }

    #[test]
    fn rules_combine_with_or() {
        let df = labs(
            vec![Some(130.0), Some(90.0), Some(90.0), None],
            vec![Some(5.0), Some(7.0), Some(5.0), None],
            vec![None, None, None, None],
        );
        let labeled = apply_labels(df, &criteria(true, true)).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(1), Some(1), Some(0), Some(0)]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let df = labs(vec![Some(126.0)], vec![Some(6.5)], vec![None]);
        let labeled = apply_labels(df.clone(), &criteria(true, false)).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(1)]);
        let labeled = apply_labels(df, &criteria(false, true)).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(1)]);
    }

    #[test]
    fn disabled_rules_default_to_negative() {
        let df = labs(vec![Some(300.0)], vec![Some(12.0)], vec![None]);
        let labeled = apply_labels(df, &criteria(false, false)).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(0)]);
    }

    #[test]
    fn missing_lab_columns_default_to_negative() {
        let df = DataFrame::new(vec![
            Series::new("age_years".into(), vec![Some(40.0), Some(61.0)]).into_column(),
        ])
        .unwrap();
        let labeled = apply_labels(df, &criteria(true, true)).unwrap();
        assert_eq!(outcome(&labeled), vec![Some(0), Some(0)]);
    }
}
