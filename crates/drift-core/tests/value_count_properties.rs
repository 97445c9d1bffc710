//! Property tests for the categorical value-count comparison.

use std::collections::BTreeMap;

use drift_core::{CategoryKey, compare_categorical_values};
use drift_model::ColumnRoles;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::{
    ProptestConfig, Strategy, prop, prop_assert, prop_assert_eq, proptest,
};

const COLUMNS: [&str; 2] = ["color", "color_code"];

type Row = (Option<&'static str>, Option<&'static str>);

fn value() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "red", "blue", "code_red", "", "green", "a b",
    ]))
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((value(), value()), 0..40)
}

fn frame(rows: &[Row]) -> DataFrame {
    let first: Vec<Option<&str>> = rows.iter().map(|row| row.0).collect();
    let second: Vec<Option<&str>> = rows.iter().map(|row| row.1).collect();
    let cols: Vec<Column> = vec![
        Series::new(COLUMNS[0].into(), first).into_column(),
        Series::new(COLUMNS[1].into(), second).into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

fn roles() -> ColumnRoles {
    ColumnRoles::new(vec![], COLUMNS.iter().map(|name| (*name).to_string()).collect()).unwrap()
}

fn direct_counts(rows: &[Row]) -> BTreeMap<CategoryKey, u64> {
    let mut counts = BTreeMap::new();
    for (first, second) in rows {
        if let Some(value) = first {
            *counts.entry(CategoryKey::new(COLUMNS[0], *value)).or_insert(0) += 1;
        }
        if let Some(value) = second {
            *counts.entry(CategoryKey::new(COLUMNS[1], *value)).or_insert(0) += 1;
        }
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arrays_stay_parallel(baseline in rows(), sample in rows()) {
        let comparison =
            compare_categorical_values(&frame(&baseline), &frame(&sample), &roles()).unwrap();
        let graph = comparison.to_bar_graph();
        prop_assert_eq!(graph.data.data1.len(), graph.categories.len());
        prop_assert_eq!(graph.data.data2.len(), graph.categories.len());
    }

    #[test]
    fn every_observed_value_appears_once_with_zero_fallback(
        baseline in rows(),
        sample in rows(),
    ) {
        let comparison =
            compare_categorical_values(&frame(&baseline), &frame(&sample), &roles()).unwrap();
        let expected_baseline = direct_counts(&baseline);
        let expected_sample = direct_counts(&sample);

        let mut union: Vec<&CategoryKey> =
            expected_baseline.keys().chain(expected_sample.keys()).collect();
        union.sort();
        union.dedup();
        prop_assert_eq!(comparison.keys().iter().collect::<Vec<_>>(), union);

        for (key, baseline_count, sample_count) in comparison.iter() {
            prop_assert_eq!(baseline_count, expected_baseline.get(key).copied().unwrap_or(0));
            prop_assert_eq!(sample_count, expected_sample.get(key).copied().unwrap_or(0));
            prop_assert!(baseline_count + sample_count > 0);
        }
    }

    #[test]
    fn ordering_is_deterministic(baseline in rows(), sample in rows()) {
        let baseline = frame(&baseline);
        let sample = frame(&sample);
        let first = compare_categorical_values(&baseline, &sample, &roles()).unwrap();
        let second = compare_categorical_values(&baseline, &sample, &roles()).unwrap();
        prop_assert_eq!(first.to_bar_graph(), second.to_bar_graph());
        prop_assert!(first.keys().windows(2).all(|pair| pair[0] < pair[1]));
    }
}
