//! Error types for monitor initialization and metric computation.

use drift_model::{DataClass, DatasetRole, DriftTest, ModelError};
use thiserror::Error;

/// Errors raised by the monitor.
#[derive(Debug, Error)]
pub enum MonitorError {
    // === Job Validation Errors ===
    /// Job description has no input schema.
    #[error("job description has no input schema")]
    MissingInputSchema,

    /// Input schema is not a record schema.
    #[error("input schema must be of type 'record', found '{found}'")]
    UnsupportedRecordType { found: String },

    /// Input schema declares no fields.
    #[error("input schema declares no fields")]
    EmptySchema,

    /// A field has a blank name.
    #[error("input schema field #{index} has an empty name")]
    EmptyFieldName { index: usize },

    /// Two fields share a name.
    #[error("input schema declares field '{name}' more than once")]
    DuplicateField { name: String },

    /// Field type cannot be resolved to a supported primitive.
    #[error("field '{field}' has unsupported type {field_type}")]
    UnresolvedFieldType { field: String, field_type: String },

    /// Declared data class contradicts the field type.
    #[error("field '{field}' is declared {declared} but its type implies {inferred}")]
    DataClassMismatch {
        field: String,
        declared: DataClass,
        inferred: DataClass,
    },

    /// Rejected by a host-supplied validator.
    #[error("job validation failed: {reason}")]
    InvalidJob { reason: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    // === Data Errors ===
    /// A column with a role is absent from a table.
    #[error("column '{column}' not found in {dataset} table")]
    MissingColumn {
        column: String,
        dataset: DatasetRole,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Output structure could not be converted to JSON.
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // === Detector Errors ===
    /// The detector could not be constructed.
    #[error("failed to create drift detector: {message}")]
    DetectorInit { message: String },

    /// The detector failed while computing a test.
    #[error("{test} drift computation failed: {message}")]
    Detector { test: DriftTest, message: String },
}

impl From<polars::prelude::PolarsError> for MonitorError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;
