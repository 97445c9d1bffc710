//! Command implementations, independent of argument parsing.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use drift_core::{
    DeclaredSchemaInference, JobSchemaValidator, MonitorContext, ValueCountComparison,
    compare_categorical_values, init_with,
};
use drift_ingest::{read_csv_table, read_job_config};
use drift_model::{ColumnRoles, MetricMap, MonitorOptions};
use tracing::{info, info_span};

/// Result of `validate`.
#[derive(Debug)]
pub struct ValidateReport {
    pub job_id: String,
    pub roles: ColumnRoles,
}

/// Result of `value-counts`.
#[derive(Debug)]
pub struct ValueCountReport {
    pub job_id: String,
    pub comparison: ValueCountComparison,
    /// Value-count entries as they appear in the full metrics record.
    pub metrics: MetricMap,
}

/// Loads the job description and initializes a monitor context.
pub fn load_context(job_path: &Path, options: &MonitorOptions) -> Result<MonitorContext> {
    let job = read_job_config(job_path)
        .with_context(|| format!("load job description {}", job_path.display()))?;
    init_with(
        job,
        options.clone(),
        &JobSchemaValidator,
        &DeclaredSchemaInference,
    )
    .with_context(|| format!("initialize monitor from {}", job_path.display()))
}

pub fn run_validate(job_path: &Path, options: &MonitorOptions) -> Result<ValidateReport> {
    let context = load_context(job_path, options)?;
    Ok(ValidateReport {
        job_id: context.job().display_id().to_string(),
        roles: context.roles().clone(),
    })
}

pub fn run_value_counts(
    job_path: &Path,
    baseline_path: &Path,
    sample_path: &Path,
    options: &MonitorOptions,
) -> Result<ValueCountReport> {
    let context = load_context(job_path, options)?;
    let span = info_span!("value_counts", job_id = context.job().display_id());
    let _guard = span.enter();
    let start = Instant::now();

    let baseline = read_csv_table(baseline_path, context.roles())
        .with_context(|| format!("read baseline {}", baseline_path.display()))?;
    let sample = read_csv_table(sample_path, context.roles())
        .with_context(|| format!("read sample {}", sample_path.display()))?;

    let comparison = compare_categorical_values(&baseline, &sample, context.roles())
        .context("compare categorical values")?;
    let metrics = comparison
        .to_metrics(context.options().value_count_layout)
        .context("render value counts")?;
    info!(
        baseline_rows = baseline.height(),
        sample_rows = sample.height(),
        distinct_values = comparison.len(),
        duration_ms = start.elapsed().as_millis(),
        "value counts complete"
    );

    Ok(ValueCountReport {
        job_id: context.job().display_id().to_string(),
        comparison,
        metrics,
    })
}
