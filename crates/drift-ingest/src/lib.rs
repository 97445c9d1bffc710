//! Host-side ingestion for drift monitoring.
//!
//! Loads the job description and the baseline/sample tables from disk so
//! that a command-line host can drive the monitor the same way the platform
//! does.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use drift_ingest::{read_csv_table, read_job_config};
//!
//! let job = read_job_config(Path::new("job.json"))?;
//! let context = drift_core::init(job)?;
//! let baseline = read_csv_table(Path::new("baseline.csv"), context.roles())?;
//! let sample = read_csv_table(Path::new("sample.csv"), context.roles())?;
//! ```

mod csv;
mod error;
mod job;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_encoding, validate_table_shape,
};

// === Job Configuration ===
pub use job::{parse_job_config, read_job_config};
