//! Merging of metric maps into one output record.

use drift_model::MetricMap;

/// Inserts every entry of `source` into `target`.
///
/// Later entries win. Returns the keys that already existed in `target`.
pub fn merge_into(target: &mut MetricMap, source: MetricMap) -> Vec<String> {
    let mut collisions = Vec::new();
    for (key, value) in source {
        if target.contains_key(&key) {
            collisions.push(key.clone());
        }
        target.insert(key, value);
    }
    collisions
}

/// Folds `sources` into one map in order, logging each overwritten key.
pub fn merge<I>(sources: I) -> MetricMap
where
    I: IntoIterator<Item = MetricMap>,
{
    let mut merged = MetricMap::new();
    for (index, source) in sources.into_iter().enumerate() {
        for key in merge_into(&mut merged, source) {
            tracing::warn!(key = %key, source_index = index, "metric key overwritten during merge");
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(entries: &[(&str, serde_json::Value)]) -> MetricMap {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn disjoint_sources_are_unioned() {
        let merged = merge(vec![
            map(&[("age_ks_pvalue", json!(0.42))]),
            map(&[("age_js_distance", json!(0.07))]),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["age_ks_pvalue"], json!(0.42));
    }

    #[test]
    fn collision_is_last_write_wins_and_reported() {
        let mut target = map(&[("score", json!(1))]);
        let collisions = merge_into(&mut target, map(&[("score", json!(2)), ("other", json!(3))]));
        assert_eq!(collisions, vec!["score".to_string()]);
        assert_eq!(target["score"], json!(2));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn merging_with_itself_keeps_every_key() {
        let source = map(&[("a", json!(1)), ("b", json!([1, 2]))]);
        let merged = merge(vec![source.clone(), source.clone()]);
        assert_eq!(merged, source);
    }

    #[test]
    fn empty_sources_yield_empty_map() {
        assert!(merge(Vec::<MetricMap>::new()).is_empty());
    }
}
