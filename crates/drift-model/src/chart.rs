//! Chart-ready structures consumed by the platform's visualization layer.

use serde::{Deserialize, Serialize};

/// Two-series bar graph with one label per index.
///
/// `data.data1`, `data.data2` and `categories` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGraph {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Horizontal bars when true.
    pub rotated: bool,
    pub data: BarGraphData,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarGraphData {
    /// Baseline series.
    pub data1: Vec<u64>,
    /// Sample series.
    pub data2: Vec<u64>,
}

/// One row of a per-feature value count table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValueCount {
    #[serde(rename = "Values")]
    pub value: String,
    #[serde(rename = "Baseline Data - Count")]
    pub baseline_count: u64,
    #[serde(rename = "Sample Data - Count")]
    pub sample_count: u64,
    #[serde(rename = "Baseline Data - %")]
    pub baseline_fraction: f64,
    #[serde(rename = "Sample Data - %")]
    pub sample_fraction: f64,
}
