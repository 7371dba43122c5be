//! Silver and gold stages over a temporary config and data directory.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use hds_adapters::LocalFetcher;
use hds_cli::pipeline::{PipelineContext, build_silver, inspect_silver, run_gold, run_silver};
use hds_output::{DataLayout, read_parquet};
use tempfile::TempDir;

const PIMA: &str = "\
Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome
6,148,72,35,0,33.6,0.627,50,1
1,85,66,29,0,26.6,0.351,31,0
8,183,64,0,0,23.3,0.672,32,1
";

const INDIANS_UNLABELED: &str = "\
Age,Gender,BMI,Family_History,Fasting_Blood_Sugar,HBA1C
48,Male,27.1,Yes,130,6.9
35,F,24.2,No,90,5.1
";

const INDIANS_BAD_BMI: &str = "\
Age,Gender,BMI,Family_History,Fasting_Blood_Sugar,HBA1C,Diabetes_Status
48,Male,2.0,Yes,130,6.9,Yes
";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(indians_csv: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let bronze = dir.path().join("bronze");
        let config = dir.path().join("config");
        fs::create_dir_all(&bronze).unwrap();
        fs::create_dir_all(&config).unwrap();
        fs::write(bronze.join("pima.csv"), PIMA).unwrap();
        fs::write(bronze.join("indians.csv"), indians_csv).unwrap();

        let registry = format!(
            "datasets:\n  \
             pima:\n    adapter: pima\n    path: {pima}\n    country: US\n    year: 1990\n  \
             indians:\n    adapter: indians\n    path: {indians}\n    country: IN\n    year: 2021\n  \
             nhanes:\n    adapter: nhanes\n    country: US\n    year: 2017\n",
            pima = bronze.join("pima.csv").display(),
            indians = bronze.join("indians.csv").display(),
        );
        fs::write(config.join("registry.yaml"), registry).unwrap();
        fs::write(
            config.join("criteria.yaml"),
            "use_label_if_present: true\nderive_rules:\n  use_fpg: true\n  fpg_diabetes_mgdl: 126\n  use_hba1c: false\n  hba1c_diabetes_pct: 6.5\n",
        )
        .unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn context(&self) -> PipelineContext {
        PipelineContext::load(
            &self.root().join("config"),
            &self.root().join("data"),
            Arc::new(LocalFetcher),
        )
        .unwrap()
    }

    fn layout(&self) -> DataLayout {
        DataLayout::new(self.root().join("data"))
    }
}

#[test]
fn test_silver_writes_parquet_with_source_labels() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    let outcome = run_silver(&ws.context(), "pima").unwrap();

    assert_eq!(outcome.adapter, "pima");
    assert_eq!(outcome.rows, 3);
    assert_eq!(outcome.positives, 2);
    assert_eq!(outcome.labeled_rows, 3);
    assert_eq!(outcome.extra_columns, vec!["dpf_raw".to_string()]);
    assert_eq!(outcome.path, ws.layout().silver_file("pima"));

    let written = read_parquet(&outcome.path).unwrap();
    assert_eq!(written.height(), 3);
    let insulin = written.column("insulin_uIUml").unwrap();
    assert_eq!(insulin.null_count(), 3);
}

#[test]
fn test_silver_derives_missing_labels() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    let (frame, adapter) = build_silver(&ws.context(), "indians").unwrap();

    assert_eq!(adapter, "indians");
    let outcome: Vec<Option<i64>> = frame
        .data()
        .column("outcome_dm")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(outcome, vec![Some(1), Some(0)]);
    assert!(!ws.layout().silver_file("indians").exists());
}

#[test]
fn test_invalid_table_is_not_written() {
    let ws = Workspace::new(INDIANS_BAD_BMI);
    let err = run_silver(&ws.context(), "indians").unwrap_err();

    assert!(format!("{err:#}").contains("bmi_kgm2"));
    assert!(!ws.layout().silver_file("indians").exists());
}

#[test]
fn test_unknown_dataset_lists_known_keys() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    let err = run_silver(&ws.context(), "framingham").unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("framingham"));
    assert!(message.contains("indians, nhanes, pima"));
}

#[test]
fn test_unimplemented_adapter_fails() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    let err = run_silver(&ws.context(), "nhanes").unwrap_err();
    assert!(format!("{err:#}").contains("not implemented"));
}

#[test]
fn test_gold_merges_every_silver_file() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    let ctx = ws.context();
    run_silver(&ctx, "pima").unwrap();
    run_silver(&ctx, "indians").unwrap();

    let gold = run_gold(&ws.layout()).unwrap();
    assert_eq!(gold.sources, 2);
    assert_eq!(gold.rows, 5);
    assert_eq!(gold.path, ws.layout().gold_file());

    let merged = read_parquet(&gold.path).unwrap();
    assert!(merged.column("dpf_raw").is_err());
    let sources = merged.column("source_id").unwrap().n_unique().unwrap();
    assert_eq!(sources, 2);
}

#[test]
fn test_gold_without_silver_fails() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    assert!(run_gold(&ws.layout()).is_err());
    assert!(!ws.layout().gold_file().exists());
}

#[test]
fn test_inspect_reports_shape_and_head() {
    let ws = Workspace::new(INDIANS_UNLABELED);
    run_silver(&ws.context(), "pima").unwrap();

    let tables = inspect_silver(&ws.layout(), 2).unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows, 3);
    assert_eq!(tables[0].head.height(), 2);
    assert_eq!(tables[0].columns, tables[0].head.width());
}
