//! Property tests for the normalization primitives.

use hds_model::{DeriveRules, LabelCriteria, Sex};
use hds_transform::{apply_labels, clean_zero_as_missing, normalize_sex};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

fn arb_reading() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(0.0)),
        4 => (1u32..400).prop_map(|v| Some(f64::from(v))),
    ]
}

fn arb_sex_token() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("male".to_string()),
        Just(" M ".to_string()),
        Just("Female".to_string()),
        Just("nonbinary".to_string()),
        Just("NB".to_string()),
        "[a-z]{0,8}",
    ])
}

proptest! {
    #[test]
    fn test_zero_cleaning_only_touches_zeros(values in proptest::collection::vec(arb_reading(), 1..50)) {
        let df = DataFrame::new(vec![
            Series::new("fpg_mgdl".into(), values.clone()).into_column(),
        ])
        .unwrap();
        let cleaned = clean_zero_as_missing(&df, &["fpg_mgdl"]).unwrap();
        let out: Vec<Option<f64>> = cleaned
            .column("fpg_mgdl")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();

        prop_assert_eq!(out.len(), values.len());
        for (before, after) in values.iter().zip(&out) {
            match before {
                Some(v) if *v == 0.0 => prop_assert_eq!(*after, None),
                other => prop_assert_eq!(after, other),
            }
        }
    }

    #[test]
    fn test_sex_normalization_is_closed_and_idempotent(token in arb_sex_token()) {
        let sex = normalize_sex(token.as_deref());
        prop_assert!(Sex::VALUES.contains(&sex.as_str()));
        prop_assert_eq!(normalize_sex(Some(sex.as_str())), sex);
    }

    #[test]
    fn test_existing_labels_are_never_rewritten(
        fpg in proptest::collection::vec(arb_reading(), 1..30),
        label in 0i64..=1,
        use_fpg in any::<bool>(),
        use_hba1c in any::<bool>(),
    ) {
        let mut outcome: Vec<Option<i64>> = vec![None; fpg.len()];
        outcome[0] = Some(label);
        let df = DataFrame::new(vec![
            Series::new("fpg_mgdl".into(), fpg).into_column(),
            Series::new("outcome_dm".into(), outcome).into_column(),
        ])
        .unwrap();
        let criteria = LabelCriteria {
            use_label_if_present: true,
            derive_rules: DeriveRules {
                use_fpg,
                use_hba1c,
                ..DeriveRules::default()
            },
        };
        let labeled = apply_labels(df.clone(), &criteria).unwrap();
        prop_assert!(labeled.equals_missing(&df));
    }

    #[test]
    fn test_derived_labels_are_complete(fpg in proptest::collection::vec(arb_reading(), 1..30)) {
        let df = DataFrame::new(vec![
            Series::new("fpg_mgdl".into(), fpg.clone()).into_column(),
        ])
        .unwrap();
        let criteria = LabelCriteria {
            use_label_if_present: true,
            derive_rules: DeriveRules {
                use_fpg: true,
                ..DeriveRules::default()
            },
        };
        let labeled = apply_labels(df, &criteria).unwrap();
        let outcome = labeled.column("outcome_dm").unwrap();
        prop_assert_eq!(outcome.null_count(), 0);

        let outcome: Vec<Option<i64>> = outcome.i64().unwrap().into_iter().collect();
        for (value, label) in fpg.iter().zip(outcome) {
            let expected = i64::from(value.is_some_and(|v| v >= 126.0));
            prop_assert_eq!(label, Some(expected));
        }
    }
}
