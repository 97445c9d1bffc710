//! Metric records exchanged between the detector, the comparator and the host.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Metric name to value. Values are scalars or chart-ready structures.
pub type MetricMap = BTreeMap<String, serde_json::Value>;

/// Which side of the comparison a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetRole {
    Baseline,
    Sample,
}

impl DatasetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetRole::Baseline => "baseline",
            DatasetRole::Sample => "sample",
        }
    }
}

impl fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
