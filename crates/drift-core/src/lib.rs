//! Core of the tabular drift monitor.
//!
//! - [`init`] validates a job description and derives column roles.
//! - [`MonitorContext::metrics`] runs the external drift detector for each
//!   configured test, compares categorical value counts and merges the
//!   results into one record.

pub mod context;
pub mod detector;
pub mod error;
pub mod merge;
pub mod metrics;
pub mod schema;
pub mod value_counts;

pub use context::{MonitorContext, init, init_with};
pub use detector::{DetectorFactory, DriftDetector};
pub use error::{MonitorError, Result};
pub use merge::{merge, merge_into};
pub use schema::{
    DeclaredSchemaInference, JobSchemaValidator, SchemaInference, SchemaValidator,
    extract_input_schema,
};
pub use value_counts::{
    CategoryKey, FEATURE_KEY_PREFIX, VALUE_COUNTS_KEY, ValueCountComparison, ValueCounts,
    compare_categorical_values,
};
