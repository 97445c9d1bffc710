//! Categorical value-count comparison between baseline and sample.
//!
//! Counts are keyed by a structured [`CategoryKey`] (column, value) and
//! ordered by that pair, so the baseline and sample arrays stay index-aligned
//! no matter what characters a value contains. Display labels
//! (`"{column}_{value}_count"`) are produced only when rendering.

use std::collections::{BTreeMap, BTreeSet};

use drift_model::{
    BarGraph, BarGraphData, ColumnRoles, DatasetRole, FeatureValueCount, MetricMap,
    ValueCountLayout,
};
use polars::prelude::{Column, DataFrame, DataType};

use crate::error::{MonitorError, Result};

/// Output key of the combined bar graph.
pub const VALUE_COUNTS_KEY: &str = "categorical_value_counts";

/// Prefix of per-feature table keys.
pub const FEATURE_KEY_PREFIX: &str = "Feature: ";

const CHART_TITLE: &str = "Categorical Value Counts";
const FRACTION_SCALE: f64 = 1000.0;

/// A distinct value of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryKey {
    pub column: String,
    pub value: String,
}

impl CategoryKey {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Chart label for this key.
    pub fn label(&self) -> String {
        format!("{}_{}_count", self.column, self.value)
    }
}

/// Per-value occurrence counts of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCounts {
    counts: BTreeMap<CategoryKey, u64>,
    rows: usize,
}

impl ValueCounts {
    /// Counts non-null values of `columns` in `df`.
    ///
    /// Values are compared as strings. A listed column that is absent from
    /// the table is an error.
    pub fn from_frame(df: &DataFrame, columns: &[String], dataset: DatasetRole) -> Result<Self> {
        let mut counts = BTreeMap::new();
        for name in columns {
            let column = df
                .column(name.as_str())
                .map_err(|_| MonitorError::MissingColumn {
                    column: name.clone(),
                    dataset,
                })?;
            count_column(column, name, &mut counts)?;
        }
        Ok(Self {
            counts,
            rows: df.height(),
        })
    }

    /// Count for a key; zero when the value was never observed.
    pub fn get(&self, key: &CategoryKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.counts.keys()
    }

    /// Number of rows in the source table.
    pub fn rows(&self) -> usize {
        self.rows
    }

}

fn count_column(
    column: &Column,
    name: &str,
    counts: &mut BTreeMap<CategoryKey, u64>,
) -> Result<()> {
    let as_strings = column.cast(&DataType::String)?;
    for value in as_strings.str()?.iter().flatten() {
        *counts.entry(CategoryKey::new(name, value)).or_insert(0) += 1;
    }
    Ok(())
}

/// Baseline and sample counts over the union of observed keys.
///
/// `keys`, `baseline` and `sample` are parallel and sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCountComparison {
    columns: Vec<String>,
    keys: Vec<CategoryKey>,
    baseline: Vec<u64>,
    sample: Vec<u64>,
    baseline_rows: usize,
    sample_rows: usize,
}

impl ValueCountComparison {
    /// Aligns two count records; absent values count as zero.
    pub fn new(columns: &[String], baseline: &ValueCounts, sample: &ValueCounts) -> Self {
        let union: BTreeSet<&CategoryKey> = baseline.keys().chain(sample.keys()).collect();
        let mut keys = Vec::with_capacity(union.len());
        let mut baseline_counts = Vec::with_capacity(union.len());
        let mut sample_counts = Vec::with_capacity(union.len());
        for key in union {
            baseline_counts.push(baseline.get(key));
            sample_counts.push(sample.get(key));
            keys.push(key.clone());
        }
        Self {
            columns: columns.to_vec(),
            keys,
            baseline: baseline_counts,
            sample: sample_counts,
            baseline_rows: baseline.rows(),
            sample_rows: sample.rows(),
        }
    }

    pub fn keys(&self) -> &[CategoryKey] {
        &self.keys
    }

    pub fn baseline_rows(&self) -> usize {
        self.baseline_rows
    }

    pub fn sample_rows(&self) -> usize {
        self.sample_rows
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// `(key, baseline count, sample count)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, u64, u64)> {
        self.keys
            .iter()
            .zip(self.baseline.iter().copied())
            .zip(self.sample.iter().copied())
            .map(|((key, baseline), sample)| (key, baseline, sample))
    }

    /// Combined horizontal bar graph (data1 = baseline, data2 = sample).
    pub fn to_bar_graph(&self) -> BarGraph {
        BarGraph {
            title: CHART_TITLE.to_string(),
            x_axis_label: "Value".to_string(),
            y_axis_label: "Count".to_string(),
            rotated: true,
            data: BarGraphData {
                data1: self.baseline.clone(),
                data2: self.sample.clone(),
            },
            categories: self.keys.iter().map(CategoryKey::label).collect(),
        }
    }

    /// One table per categorical column, in declared column order.
    pub fn feature_tables(&self) -> Vec<(String, Vec<FeatureValueCount>)> {
        self.columns
            .iter()
            .map(|column| {
                let rows = self
                    .iter()
                    .filter(|(key, _, _)| key.column == *column)
                    .map(|(key, baseline, sample)| FeatureValueCount {
                        value: key.value.clone(),
                        baseline_count: baseline,
                        sample_count: sample,
                        baseline_fraction: fraction(baseline, self.baseline_rows),
                        sample_fraction: fraction(sample, self.sample_rows),
                    })
                    .collect();
                (format!("{FEATURE_KEY_PREFIX}{column}"), rows)
            })
            .collect()
    }

    /// Renders the comparison into output metrics.
    pub fn to_metrics(&self, layout: ValueCountLayout) -> Result<MetricMap> {
        let mut metrics = MetricMap::new();
        if layout.includes_combined() {
            let graph = serde_json::to_value(self.to_bar_graph()).map_err(|source| {
                MonitorError::Serialize {
                    what: "value count graph",
                    source,
                }
            })?;
            metrics.insert(VALUE_COUNTS_KEY.to_string(), graph);
        }
        if layout.includes_per_feature() {
            for (key, rows) in self.feature_tables() {
                let table = serde_json::to_value(rows).map_err(|source| {
                    MonitorError::Serialize {
                        what: "value count table",
                        source,
                    }
                })?;
                metrics.insert(key, table);
            }
        }
        Ok(metrics)
    }
}

/// Share of `rows`, rounded to three decimals; zero for an empty table.
fn fraction(count: u64, rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    (count as f64 / rows as f64 * FRACTION_SCALE).round() / FRACTION_SCALE
}

/// Compares categorical value counts of the two tables.
pub fn compare_categorical_values(
    baseline: &DataFrame,
    sample: &DataFrame,
    roles: &ColumnRoles,
) -> Result<ValueCountComparison> {
    let columns = roles.categorical_columns();
    let baseline_counts = ValueCounts::from_frame(baseline, columns, DatasetRole::Baseline)?;
    let sample_counts = ValueCounts::from_frame(sample, columns, DatasetRole::Sample)?;
    let comparison = ValueCountComparison::new(columns, &baseline_counts, &sample_counts);
    tracing::debug!(
        columns = columns.len(),
        distinct_values = comparison.len(),
        "compared categorical value counts"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn string_frame(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    fn repeat(value: &str, times: usize) -> Vec<Option<&str>> {
        vec![Some(value); times]
    }

    fn roles(categorical: &[&str]) -> ColumnRoles {
        ColumnRoles::new(
            vec![],
            categorical.iter().map(|name| (*name).to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn color_scenario() {
        let mut baseline_values = repeat("red", 3);
        baseline_values.extend(repeat("blue", 2));
        let mut sample_values = repeat("red", 1);
        sample_values.extend(repeat("green", 4));
        let baseline = string_frame(vec![("color", baseline_values)]);
        let sample = string_frame(vec![("color", sample_values)]);

        let comparison =
            compare_categorical_values(&baseline, &sample, &roles(&["color"])).unwrap();
        let graph = comparison.to_bar_graph();

        assert_eq!(
            graph.categories,
            vec!["color_blue_count", "color_green_count", "color_red_count"]
        );
        assert_eq!(graph.data.data1, vec![2, 0, 3]);
        assert_eq!(graph.data.data2, vec![0, 4, 1]);
        assert!(graph.rotated);
    }

    #[test]
    fn no_categorical_columns_yields_empty_graph() {
        let baseline = DataFrame::new(vec![
            Series::new("age".into(), vec![31i64, 45]).into_column(),
        ])
        .unwrap();
        let comparison =
            compare_categorical_values(&baseline, &baseline, &ColumnRoles::default()).unwrap();
        let graph = comparison.to_bar_graph();

        assert!(comparison.is_empty());
        assert!(graph.data.data1.is_empty());
        assert!(graph.data.data2.is_empty());
        assert!(graph.categories.is_empty());
    }

    #[test]
    fn identical_value_sets_report_observed_frequencies() {
        let baseline = string_frame(vec![(
            "size",
            vec![Some("s"), Some("m"), Some("m"), Some("l")],
        )]);
        let sample = string_frame(vec![(
            "size",
            vec![Some("l"), Some("l"), Some("m"), Some("s")],
        )]);
        let comparison =
            compare_categorical_values(&baseline, &sample, &roles(&["size"])).unwrap();

        let rows: Vec<(&str, u64, u64)> = comparison
            .iter()
            .map(|(key, b, s)| (key.value.as_str(), b, s))
            .collect();
        assert_eq!(rows, vec![("l", 1, 2), ("m", 2, 1), ("s", 1, 1)]);
    }

    #[test]
    fn nulls_are_not_counted() {
        let baseline = string_frame(vec![("color", vec![Some("red"), None, None])]);
        let sample = string_frame(vec![("color", vec![None, Some("red")])]);
        let comparison =
            compare_categorical_values(&baseline, &sample, &roles(&["color"])).unwrap();

        assert_eq!(comparison.len(), 1);
        let counts: Vec<(u64, u64)> = comparison.iter().map(|(_, b, s)| (b, s)).collect();
        assert_eq!(counts, vec![(1, 1)]);
        assert_eq!(comparison.baseline_rows(), 3);
    }

    #[test]
    fn missing_column_names_the_dataset() {
        let baseline = string_frame(vec![("color", repeat("red", 1))]);
        let sample = string_frame(vec![("shade", repeat("red", 1))]);
        let err = compare_categorical_values(&baseline, &sample, &roles(&["color"])).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::MissingColumn {
                column,
                dataset: DatasetRole::Sample,
            } if column == "color"
        ));
    }

    #[test]
    fn delimiter_in_names_does_not_merge_keys() {
        // Both keys render to "a_b_c_count" but stay distinct entries.
        let baseline = string_frame(vec![
            ("a", repeat("b_c", 2)),
            ("a_b", repeat("c", 1)),
        ]);
        let sample = baseline.clone();
        let comparison =
            compare_categorical_values(&baseline, &sample, &roles(&["a", "a_b"])).unwrap();

        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison.keys()[0], CategoryKey::new("a", "b_c"));
        assert_eq!(comparison.keys()[1], CategoryKey::new("a_b", "c"));
        assert_eq!(comparison.to_bar_graph().data.data1, vec![2, 1]);
    }

    #[test]
    fn numeric_codes_are_counted_as_strings() {
        let baseline = DataFrame::new(vec![
            Series::new("zip".into(), vec![10001i64, 10001, 94105]).into_column(),
        ])
        .unwrap();
        let comparison =
            compare_categorical_values(&baseline, &baseline, &roles(&["zip"])).unwrap();
        let labels: Vec<String> = comparison.keys().iter().map(CategoryKey::label).collect();
        assert_eq!(labels, vec!["zip_10001_count", "zip_94105_count"]);
    }

    #[test]
    fn feature_tables_follow_declared_order_with_fractions() {
        let baseline = string_frame(vec![
            ("shape", vec![Some("round"), Some("square"), Some("round")]),
            ("color", vec![Some("red"), Some("red"), Some("blue")]),
        ]);
        let sample = string_frame(vec![
            ("shape", vec![Some("round")]),
            ("color", vec![Some("green")]),
        ]);
        let comparison =
            compare_categorical_values(&baseline, &sample, &roles(&["shape", "color"])).unwrap();
        let tables = comparison.feature_tables();

        assert_eq!(tables[0].0, "Feature: shape");
        assert_eq!(tables[1].0, "Feature: color");

        let color_rows = &tables[1].1;
        let values: Vec<&str> = color_rows.iter().map(|row| row.value.as_str()).collect();
        assert_eq!(values, vec!["blue", "green", "red"]);
        assert_eq!(color_rows[0].baseline_fraction, 0.333);
        assert_eq!(color_rows[1].sample_fraction, 1.0);
        assert_eq!(color_rows[2].baseline_count, 2);
        assert_eq!(color_rows[2].baseline_fraction, 0.667);
        assert_eq!(color_rows[2].sample_count, 0);
    }

    #[test]
    fn empty_table_fractions_are_zero() {
        let baseline = string_frame(vec![("color", repeat("red", 2))]);
        let sample = string_frame(vec![("color", vec![])]);
        let comparison =
            compare_categorical_values(&baseline, &sample, &roles(&["color"])).unwrap();
        let tables = comparison.feature_tables();
        assert_eq!(tables[0].1[0].sample_fraction, 0.0);
        assert_eq!(tables[0].1[0].baseline_fraction, 1.0);
    }

    #[test]
    fn layout_controls_rendered_keys() {
        let frame = string_frame(vec![("color", repeat("red", 1))]);
        let comparison =
            compare_categorical_values(&frame, &frame, &roles(&["color"])).unwrap();

        let combined = comparison.to_metrics(ValueCountLayout::Combined).unwrap();
        assert_eq!(
            combined.keys().collect::<Vec<_>>(),
            vec![VALUE_COUNTS_KEY]
        );

        let per_feature = comparison.to_metrics(ValueCountLayout::PerFeature).unwrap();
        assert_eq!(
            per_feature.keys().collect::<Vec<_>>(),
            vec!["Feature: color"]
        );

        let both = comparison.to_metrics(ValueCountLayout::Both).unwrap();
        assert_eq!(both.len(), 2);
    }
}
