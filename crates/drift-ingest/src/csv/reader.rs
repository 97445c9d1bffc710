//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use drift_model::{ColumnRoles, DataClass};
use polars::prelude::{
    CsvReadOptions, DataFrame, DataType, PlSmallStr, PolarsError, Schema, SerReader,
};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows used by Polars for dtype inference.
const INFER_SCHEMA_ROWS: usize = 100;

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 files by their byte order mark.
///
/// A UTF-8 BOM is accepted; Polars strips it from the first header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Validate DataFrame shape after loading.
///
/// Blank column names are rejected. An empty table is allowed (it produces
/// zero counts downstream) but logged.
pub fn validate_table_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        tracing::warn!(path = %path.display(), "table has no rows");
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Declared columns get a fixed dtype: categorical columns are read as
/// text and numerical columns as `Float64`. Inference from the first rows
/// only applies to undeclared columns, so a code like `01234` keeps its
/// leading zero in every file.
pub fn read_csv_table(path: &Path, roles: &ColumnRoles) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let header = read_header(path)?;
    let overwrite = declared_dtypes(&header, roles);
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_schema_overwrite((!overwrite.is_empty()).then(|| Arc::new(overwrite)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| csv_parse_error(path, &e))?
        .finish()
        .map_err(|e| csv_parse_error(path, &e))?;

    validate_table_shape(&df, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

fn csv_parse_error(path: &Path, error: &PolarsError) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Column names from the header row, without reading any data.
fn read_header(path: &Path) -> Result<Vec<String>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_n_rows(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| csv_parse_error(path, &e))?
        .finish()
        .map_err(|e| csv_parse_error(path, &e))?;
    Ok(df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect())
}

/// Dtype overrides for the declared columns present in the header.
///
/// Declared columns absent from the file are left out so the comparator
/// reports them against the right dataset.
fn declared_dtypes(header: &[String], roles: &ColumnRoles) -> Schema {
    header
        .iter()
        .filter_map(|name| {
            let dtype = match roles.class_of(name)? {
                DataClass::Numerical => DataType::Float64,
                DataClass::Categorical => DataType::String,
            };
            Some((PlSmallStr::from(name.as_str()), dtype))
        })
        .collect()
}
