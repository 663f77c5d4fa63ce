//! Report Data Structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Statistics computed over one batch of timed runs
///
/// Metric values keep the order in which the statistics were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the wrapped function
    pub function: String,
    /// Number of runs in this batch
    pub runs: usize,
    /// Elapsed seconds per run, in run order
    pub samples: Vec<f64>,
    /// Statistic name -> computed value
    pub values: IndexMap<String, f64>,
}

impl Report {
    /// Create an empty report for `function` over the given samples
    pub fn new(function: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            function: function.into(),
            runs: samples.len(),
            samples,
            values: IndexMap::new(),
        }
    }

    /// Record a metric value
    ///
    /// Re-inserting an existing name replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Get a metric value
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether a metric is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate metrics in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no metrics were computed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The per-run sample series this report was computed from
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// `(mean, stdev)` in seconds, when both were computed
    pub fn approximate_running_time(&self) -> Option<(f64, f64)> {
        Some((self.get("mean")?, self.get("stdev")?))
    }
}

impl std::ops::Index<&str> for Report {
    type Output = f64;

    fn index(&self, name: &str) -> &f64 {
        match self.values.get(name) {
            Some(value) => value,
            None => panic!("no metric named {:?} in report for {}", name, self.function),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format_human_output(self, None))
    }
}
