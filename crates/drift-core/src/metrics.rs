//! Metric orchestration.
//!
//! Runs every configured detector request in order, adds the categorical
//! value-count comparison and merges everything into one record.

use std::iter::{self, Once};
use std::time::Instant;

use drift_model::MetricMap;
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use crate::context::MonitorContext;
use crate::detector::DetectorFactory;
use crate::error::{MonitorError, Result};
use crate::merge::merge;
use crate::value_counts::compare_categorical_values;

impl MonitorContext {
    /// Computes the combined drift record for `baseline` and `sample`.
    ///
    /// # Errors
    ///
    /// Fails if the detector cannot be built or a test fails, or if a
    /// categorical column is missing from either table.
    pub fn metrics(
        &self,
        baseline: &DataFrame,
        sample: &DataFrame,
        factory: &dyn DetectorFactory,
    ) -> Result<MetricMap> {
        let span = info_span!(
            "metrics",
            job_id = self.job().display_id(),
            baseline_rows = baseline.height(),
            sample_rows = sample.height()
        );
        let _guard = span.enter();
        let start = Instant::now();

        let detector = factory
            .create(baseline, sample, self.job())
            .map_err(|error| MonitorError::DetectorInit {
                message: format!("{error:#}"),
            })?;

        let options = self.options();
        let mut sources = Vec::with_capacity(options.tests.len() + 1);
        for request in &options.tests {
            let test_start = Instant::now();
            let metrics = detector
                .calculate_drift(request.test, request.flattening_suffix.as_deref())
                .map_err(|error| MonitorError::Detector {
                    test: request.test,
                    message: format!("{error:#}"),
                })?;
            debug!(
                test = %request.test,
                metric_count = metrics.len(),
                duration_ms = test_start.elapsed().as_millis(),
                "drift test complete"
            );
            sources.push(metrics);
        }

        let comparison = compare_categorical_values(baseline, sample, self.roles())?;
        sources.push(comparison.to_metrics(options.value_count_layout)?);

        let record = merge(sources);
        info!(
            metric_count = record.len(),
            tests = options.tests.len(),
            duration_ms = start.elapsed().as_millis(),
            "metrics complete"
        );
        Ok(record)
    }

    /// Same as [`MonitorContext::metrics`], as a sequence of exactly one record.
    pub fn metrics_iter(
        &self,
        baseline: &DataFrame,
        sample: &DataFrame,
        factory: &dyn DetectorFactory,
    ) -> Result<Once<MetricMap>> {
        self.metrics(baseline, sample, factory).map(iter::once)
    }
}
