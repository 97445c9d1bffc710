//! Job description loading.

use std::path::Path;

use drift_model::JobConfig;

use crate::error::{IngestError, Result};

/// Reads and parses a job description JSON file.
pub fn read_job_config(path: &Path) -> Result<JobConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_job_config(&contents, path)
}

/// Parses a job description; `origin` is used in error messages only.
pub fn parse_job_config(contents: &str, origin: &Path) -> Result<JobConfig> {
    let job: JobConfig =
        serde_json::from_str(contents).map_err(|source| IngestError::JobParse {
            path: origin.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %origin.display(),
        job_id = job.display_id(),
        "loaded job description"
    );
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_job_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"jobId": "j-1", "inputSchema": {{"type": "record", "fields": [{{"name": "age", "type": "int"}}]}}}}"#
        )
        .unwrap();

        let job = read_job_config(file.path()).unwrap();
        assert_eq!(job.job_id.as_deref(), Some("j-1"));
        assert_eq!(job.input_schema.unwrap().fields[0].name, "age");
    }

    #[test]
    fn test_parse_complex_field_types() {
        let contents = r#"{
            "jobId": "j-2",
            "inputSchema": {
                "type": "record",
                "fields": [
                    {"name": "tier", "type": {"type": "enum", "name": "Tier", "symbols": ["gold", "basic"]}},
                    {"name": "opened", "type": ["null", {"type": "int", "logicalType": "date"}]}
                ]
            }
        }"#;
        let job = parse_job_config(contents, Path::new("job.json")).unwrap();
        let fields = job.input_schema.unwrap().fields;
        assert_eq!(fields[0].field_type.primitive(), Some("enum"));
        assert_eq!(fields[1].field_type.logical_type(), Some("date"));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_job_config("{not json", Path::new("job.json")).unwrap_err();
        assert!(matches!(err, IngestError::JobParse { .. }));
        assert!(err.to_string().contains("job.json"));
    }

    #[test]
    fn test_missing_job_file() {
        let err = read_job_config(Path::new("/no/such/job.json")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
