//! Integration tests for raw CSV ingestion.

use std::fs;

use hds_ingest::{IngestError, read_csv_table};
use polars::prelude::DataType;

#[test]
fn reads_abbreviated_pima_headers_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pima.csv");
    fs::write(
        &path,
        "preg,plas,pres,skin,insu,mass,pedi,age,class\n\
         6,148,72,35,0,33.6,0.627,50,tested_positive\n\
         1,85,66,29,0,26.6,0.351,31,tested_negative\n",
    )
    .expect("write csv");

    let df = read_csv_table(&path).expect("read csv");

    assert_eq!(df.height(), 2);
    assert_eq!(
        df.get_column_names_str(),
        vec!["preg", "plas", "pres", "skin", "insu", "mass", "pedi", "age", "class"]
    );
    assert_eq!(df.column("mass").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("class").unwrap().dtype(), &DataType::String);
}

#[test]
fn missing_source_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn missing_value_tokens_become_nulls() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pima.csv");
    fs::write(
        &path,
        "Age,Glucose,BMI,Outcome\n\
         50,148,NA,1\n\
         31,NaN,26.6,N/A\n\
         32,null,,0\n",
    )
    .expect("write csv");

    let df = read_csv_table(&path).expect("read csv");

    assert_eq!(df.column("Glucose").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("Glucose").unwrap().null_count(), 2);
    assert_eq!(df.column("BMI").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("BMI").unwrap().null_count(), 2);
    assert_eq!(df.column("Outcome").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("Outcome").unwrap().null_count(), 1);
}
