//! Configuration options for a monitoring run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drift_test::TestRequest;
use crate::error::ModelError;

/// How categorical value counts are rendered into the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueCountLayout {
    /// One combined bar graph across all categorical columns.
    #[default]
    Combined,
    /// One table per categorical column, keyed `"Feature: <column>"`.
    PerFeature,
    /// Both of the above.
    Both,
}

impl ValueCountLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::PerFeature => "per-feature",
            Self::Both => "both",
        }
    }

    pub fn includes_combined(&self) -> bool {
        matches!(self, Self::Combined | Self::Both)
    }

    pub fn includes_per_feature(&self) -> bool {
        matches!(self, Self::PerFeature | Self::Both)
    }
}

impl fmt::Display for ValueCountLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueCountLayout {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(Self::Combined),
            "per-feature" | "per_feature" => Ok(Self::PerFeature),
            "both" => Ok(Self::Both),
            other => Err(ModelError::UnknownLayout(other.to_string())),
        }
    }
}

/// Options controlling a monitoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorOptions {
    /// Reject declared data classes that contradict the field type.
    #[serde(default = "default_check_schema")]
    pub check_schema: bool,

    /// Detector requests, executed in order.
    #[serde(default = "TestRequest::standard_set")]
    pub tests: Vec<TestRequest>,

    #[serde(default)]
    pub value_count_layout: ValueCountLayout,
}

fn default_check_schema() -> bool {
    true
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            check_schema: true,
            tests: TestRequest::standard_set(),
            value_count_layout: ValueCountLayout::default(),
        }
    }
}

impl MonitorOptions {
    pub fn with_check_schema(mut self, enable: bool) -> Self {
        self.check_schema = enable;
        self
    }

    pub fn with_tests(mut self, tests: Vec<TestRequest>) -> Self {
        self.tests = tests;
        self
    }

    pub fn with_value_count_layout(mut self, layout: ValueCountLayout) -> Self {
        self.value_count_layout = layout;
        self
    }
}
