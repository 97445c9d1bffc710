//! Job validation and column role derivation.
//!
//! Both steps sit behind traits so a host can plug in its own schema
//! contract. The defaults implement the declared-schema rules:
//!
//! - [`JobSchemaValidator`] checks the structure of the input schema.
//! - [`DeclaredSchemaInference`] assigns every declared field to exactly one
//!   of the numerical/categorical role sets.

use std::collections::BTreeSet;

use drift_model::{ColumnRoles, DataClass, InputSchema, JobConfig, SchemaField};

use crate::error::{MonitorError, Result};

/// Validates a job description before any role derivation.
pub trait SchemaValidator {
    /// Returns an error describing the first contract violation.
    fn validate(&self, job: &JobConfig) -> Result<()>;
}

/// Derives column roles from a validated input schema.
pub trait SchemaInference {
    /// Splits the declared fields into numerical and categorical columns.
    ///
    /// `check_schema` enables consistency checks between declared classes
    /// and field types.
    fn infer_roles(&self, schema: &InputSchema, check_schema: bool) -> Result<ColumnRoles>;
}

/// Structural validation of the declared input schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobSchemaValidator;

impl SchemaValidator for JobSchemaValidator {
    fn validate(&self, job: &JobConfig) -> Result<()> {
        let schema = extract_input_schema(job)?;
        if schema.record_type != "record" {
            return Err(MonitorError::UnsupportedRecordType {
                found: schema.record_type.clone(),
            });
        }
        if schema.fields.is_empty() {
            return Err(MonitorError::EmptySchema);
        }
        let mut seen = BTreeSet::new();
        for (index, field) in schema.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(MonitorError::EmptyFieldName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(MonitorError::DuplicateField {
                    name: field.name.clone(),
                });
            }
            if field.field_type.primitive().is_none() {
                return Err(unresolved(field));
            }
        }
        Ok(())
    }
}

/// Role derivation from declared data classes and field types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredSchemaInference;

impl SchemaInference for DeclaredSchemaInference {
    fn infer_roles(&self, schema: &InputSchema, check_schema: bool) -> Result<ColumnRoles> {
        let mut numerical = Vec::new();
        let mut categorical = Vec::new();
        for field in &schema.fields {
            match field_class(field, check_schema)? {
                DataClass::Numerical => numerical.push(field.name.clone()),
                DataClass::Categorical => categorical.push(field.name.clone()),
            }
        }
        Ok(ColumnRoles::new(numerical, categorical)?)
    }
}

/// Returns the input schema of a job, or `MissingInputSchema`.
pub fn extract_input_schema(job: &JobConfig) -> Result<&InputSchema> {
    job.input_schema
        .as_ref()
        .ok_or(MonitorError::MissingInputSchema)
}

fn field_class(field: &SchemaField, check_schema: bool) -> Result<DataClass> {
    let implied = field.field_type.implied_class();
    match (field.data_class, implied) {
        (Some(declared), Some(inferred)) if check_schema && declared != inferred => {
            // Numeric codes may be declared categorical; the reverse is not computable.
            if declared == DataClass::Numerical {
                Err(MonitorError::DataClassMismatch {
                    field: field.name.clone(),
                    declared,
                    inferred,
                })
            } else {
                Ok(declared)
            }
        }
        (Some(declared), _) => Ok(declared),
        (None, Some(inferred)) => Ok(inferred),
        (None, None) => Err(unresolved(field)),
    }
}

fn unresolved(field: &SchemaField) -> MonitorError {
    MonitorError::UnresolvedFieldType {
        field: field.name.clone(),
        field_type: field.field_type.to_string(),
    }
}
