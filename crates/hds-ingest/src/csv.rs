//! CSV reading.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, PlSmallStr, SerReader};

use crate::error::{IngestError, Result};

/// Rows Polars samples when inferring column dtypes.
const INFER_SCHEMA_ROWS: usize = 1000;

/// Cell contents read as missing in every column, besides empty cells.
pub const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn csv_options() -> CsvReadOptions {
    let missing: Vec<PlSmallStr> = MISSING_TOKENS.iter().map(|token| (*token).into()).collect();
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .map_parse_options(|options| {
            options.with_null_values(Some(NullValues::AllColumns(missing.clone())))
        })
}

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn check_bom(prefix: &[u8], source_name: &str) -> Result<()> {
    if prefix.len() >= 2 {
        if prefix[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                source_name: source_name.to_string(),
                encoding: "UTF-16 LE",
            });
        }
        if prefix[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                source_name: source_name.to_string(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Rejects files that start with a UTF-16 byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    check_bom(&buffer[..bytes_read], &path.display().to_string())
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Dtypes are inferred; empty cells and [`MISSING_TOKENS`] become nulls.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;
    let source_name = path.display().to_string();

    let df = csv_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;

    finish_table(df, &source_name)
}

/// Reads CSV content already held in memory (e.g. a fetched response body).
///
/// `source_name` is only used in errors and logs.
pub fn read_csv_bytes(bytes: Vec<u8>, source_name: &str) -> Result<DataFrame> {
    check_bom(&bytes, source_name)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    }

    let df = csv_options()
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    finish_table(df, source_name)
}

fn finish_table(df: DataFrame, source_name: &str) -> Result<DataFrame> {
    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    }
    tracing::debug!(
        source = %source_name,
        rows = df.height(),
        columns = df.width(),
        "read raw table"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_infers_types() {
        let file = create_temp_csv("Glucose,Outcome\n148,tested_positive\n85,tested_negative\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("Glucose").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("Outcome").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_read_csv_table_empty_cells_are_null() {
        let file = create_temp_csv("Age,BMI\n50,\n31,26.6\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.column("BMI").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_csv_bytes_missing_tokens_keep_numeric_dtype() {
        let df = read_csv_bytes(b"BMI,Glucose\nNA,148\n26.6,NaN\n".to_vec(), "memory").unwrap();

        assert_eq!(df.column("BMI").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("BMI").unwrap().null_count(), 1);
        assert_eq!(df.column("Glucose").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("Glucose").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_table_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0]).unwrap();
        let result = read_csv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_bytes() {
        let df = read_csv_bytes(b"age_years,sex\n40,F\n".to_vec(), "memory").unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.get_column_names_str(), vec!["age_years", "sex"]);
    }

    #[test]
    fn test_read_csv_bytes_empty() {
        let result = read_csv_bytes(b"  \n".to_vec(), "memory");
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
