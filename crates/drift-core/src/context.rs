//! Monitor context created at initialization.
//!
//! The context is the only state shared between initialization and metric
//! computation:
//!
//! - **Job**: the validated job description, passed on to the detector
//! - **Roles**: numerical and categorical column sets ([`ColumnRoles`])
//! - **Options**: run configuration ([`MonitorOptions`])
//!
//! Re-initializing builds a fresh context; nothing is held globally.

use drift_model::{ColumnRoles, JobConfig, MonitorOptions};

use crate::error::Result;
use crate::schema::{
    DeclaredSchemaInference, JobSchemaValidator, SchemaInference, SchemaValidator,
    extract_input_schema,
};

/// Validated job, derived column roles and run options.
#[derive(Debug, Clone)]
pub struct MonitorContext {
    job: JobConfig,
    roles: ColumnRoles,
    options: MonitorOptions,
}

impl MonitorContext {
    pub fn job(&self) -> &JobConfig {
        &self.job
    }

    pub fn roles(&self) -> &ColumnRoles {
        &self.roles
    }

    pub fn options(&self) -> &MonitorOptions {
        &self.options
    }
}

/// Validates `job` and derives column roles with the default collaborators.
///
/// # Errors
///
/// Fails fast on the first schema contract violation.
pub fn init(job: JobConfig) -> Result<MonitorContext> {
    init_with(
        job,
        MonitorOptions::default(),
        &JobSchemaValidator,
        &DeclaredSchemaInference,
    )
}

/// Validates `job` and derives column roles with the given collaborators.
pub fn init_with(
    job: JobConfig,
    options: MonitorOptions,
    validator: &dyn SchemaValidator,
    inference: &dyn SchemaInference,
) -> Result<MonitorContext> {
    validator.validate(&job)?;
    let schema = extract_input_schema(&job)?;
    let roles = inference.infer_roles(schema, options.check_schema)?;
    tracing::info!(
        job_id = job.display_id(),
        numerical = roles.numerical_columns().len(),
        categorical = roles.categorical_columns().len(),
        "monitor initialized"
    );
    Ok(MonitorContext {
        job,
        roles,
        options,
    })
}
