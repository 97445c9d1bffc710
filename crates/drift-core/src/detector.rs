//! Drift detector trait seam.
//!
//! The statistical tests themselves live outside this workspace. A host
//! provides a [`DetectorFactory`] that builds a [`DriftDetector`] over the
//! baseline and sample tables; the orchestrator then asks it for one test at
//! a time.
//!
//! # Example
//!
//! ```ignore
//! use drift_core::detector::{DetectorFactory, DriftDetector};
//!
//! struct ScipyBridge;
//!
//! impl DetectorFactory for ScipyBridge {
//!     fn create<'a>(
//!         &self,
//!         baseline: &'a DataFrame,
//!         sample: &'a DataFrame,
//!         job: &'a JobConfig,
//!     ) -> anyhow::Result<Box<dyn DriftDetector + 'a>> {
//!         Ok(Box::new(BridgeDetector { baseline, sample, job }))
//!     }
//! }
//! ```

use anyhow::Result;
use drift_model::{DriftTest, JobConfig, MetricMap};
use polars::prelude::DataFrame;

/// Computes drift metrics for one baseline/sample pair.
pub trait DriftDetector {
    /// Runs `test` over the columns the detector was built for.
    ///
    /// Every metric name in the returned map should carry
    /// `flattening_suffix` when one is given, so that results of different
    /// tests never share a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the test cannot be computed for the inputs.
    fn calculate_drift(&self, test: DriftTest, flattening_suffix: Option<&str>)
    -> Result<MetricMap>;
}

/// Builds detectors from the inputs of a monitoring run.
pub trait DetectorFactory {
    /// Creates a detector over `baseline` and `sample` for `job`.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are unusable for the detector.
    fn create<'a>(
        &self,
        baseline: &'a DataFrame,
        sample: &'a DataFrame,
        job: &'a JobConfig,
    ) -> Result<Box<dyn DriftDetector + 'a>>;
}
