pub mod chart;
pub mod error;
pub mod metrics;
pub mod options;
pub mod roles;
pub mod schema;

pub use chart::{BarGraph, BarGraphData, FeatureValueCount};
pub use drift_test::{DriftTest, TestRequest};
pub use error::{ModelError, Result};
pub use metrics::{DatasetRole, MetricMap};
pub use options::{MonitorOptions, ValueCountLayout};
pub use roles::ColumnRoles;
pub use schema::{
    ComplexType, DataClass, FieldRole, FieldType, InputSchema, JobConfig, SchemaField,
};
