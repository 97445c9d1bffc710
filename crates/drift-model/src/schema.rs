//! Job configuration and declared input schema.
//!
//! The job JSON is supplied by the host platform. Only `jobId` and
//! `inputSchema` are interpreted here; every other key is kept as opaque
//! metadata and handed to the drift detector untouched.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Job description supplied by the host platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    /// Platform job identifier, if the host provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Declared input schema (required by validation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<InputSchema>,
    /// Remaining platform metadata.
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl JobConfig {
    /// Creates a job with the given input schema and no metadata.
    pub fn new(input_schema: InputSchema) -> Self {
        Self {
            job_id: None,
            input_schema: Some(input_schema),
            metadata: BTreeMap::new(),
        }
    }

    /// Sets the job identifier.
    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    /// Job identifier for logging, `"-"` when absent.
    pub fn display_id(&self) -> &str {
        self.job_id.as_deref().unwrap_or("-")
    }
}

/// Avro-style record schema describing the model inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Schema kind; validation only accepts `"record"`.
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl InputSchema {
    /// Creates a `record` schema from the given fields.
    pub fn record(fields: Vec<SchemaField>) -> Self {
        Self {
            name: None,
            record_type: "record".to_string(),
            fields,
        }
    }
}

/// A single declared input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Platform role, passed through to the detector with the job. Role
    /// derivation covers every declared field whatever its role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<FieldRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_class: Option<DataClass>,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, primitive: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Primitive(primitive.into()),
            role: None,
            data_class: None,
        }
    }

    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_data_class(mut self, data_class: DataClass) -> Self {
        self.data_class = Some(data_class);
        self
    }
}

/// Avro field type.
///
/// A primitive name (`"double"`), a union (`["null", "double"]`) or a type
/// object such as `{"type": "enum", "symbols": [..]}` or
/// `{"type": "int", "logicalType": "date"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldType {
    Primitive(String),
    Union(Vec<FieldType>),
    Complex(ComplexType),
}

/// Avro type written as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexType {
    #[serde(rename = "type")]
    pub base: Box<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_type: Option<String>,
    /// Remaining attributes (`symbols`, `items`, `precision`, ...).
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl FieldType {
    /// Returns the first non-`null` base type name.
    pub fn primitive(&self) -> Option<&str> {
        match self {
            FieldType::Primitive(name) => Some(name.as_str()).filter(|name| *name != "null"),
            FieldType::Union(members) => members.iter().find_map(FieldType::primitive),
            FieldType::Complex(complex) => complex.base.primitive(),
        }
    }

    /// Logical type of the first non-`null` member, if annotated.
    pub fn logical_type(&self) -> Option<&str> {
        match self {
            FieldType::Primitive(_) => None,
            FieldType::Union(members) => members
                .iter()
                .find(|member| member.primitive().is_some())
                .and_then(FieldType::logical_type),
            FieldType::Complex(complex) => complex.logical_type.as_deref(),
        }
    }

    /// Class implied by the type alone.
    ///
    /// `decimal` is numerical whatever its backing type. Temporal logical
    /// types imply no class and need an explicit `dataClass`.
    pub fn implied_class(&self) -> Option<DataClass> {
        match self.logical_type() {
            Some("decimal") => Some(DataClass::Numerical),
            Some(logical) if is_temporal(logical) => None,
            _ => self.primitive().and_then(DataClass::from_primitive),
        }
    }
}

fn is_temporal(logical_type: &str) -> bool {
    logical_type == "date"
        || logical_type.starts_with("time-")
        || logical_type.starts_with("timestamp-")
        || logical_type.starts_with("local-timestamp-")
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(name) => f.write_str(name),
            FieldType::Union(members) => {
                f.write_str("[")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str("]")
            }
            FieldType::Complex(complex) => match &complex.logical_type {
                Some(logical) => write!(f, "{} ({logical})", complex.base),
                None => write!(f, "{}", complex.base),
            },
        }
    }
}

/// Role a field plays for the monitored model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Predictor,
    NonPredictor,
    Label,
    Score,
    Identifier,
    Weight,
}

/// Statistical class of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataClass {
    Numerical,
    Categorical,
}

impl DataClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataClass::Numerical => "numerical",
            DataClass::Categorical => "categorical",
        }
    }

    /// Class implied by an Avro primitive type, if any.
    pub fn from_primitive(primitive: &str) -> Option<Self> {
        match primitive {
            "int" | "long" | "float" | "double" => Some(DataClass::Numerical),
            "string" | "boolean" | "enum" | "bytes" | "fixed" => Some(DataClass::Categorical),
            _ => None,
        }
    }
}

impl fmt::Display for DataClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
