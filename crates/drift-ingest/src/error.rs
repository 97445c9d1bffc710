//! Error types for job and table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading monitor inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV header contains a blank column name.
    #[error("CSV file {path} has an empty column name")]
    EmptyColumnName { path: PathBuf },

    // === Job Errors ===
    /// Job description is not valid JSON for the expected shape.
    #[error("failed to parse job description {path}: {source}")]
    JobParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
