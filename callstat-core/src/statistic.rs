//! Statistic Table
//!
//! Maps the well-known statistic names onto reducers from `callstat-stats`,
//! with an explicitly named extension point for caller-supplied reducers.

use crate::error::TimerError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Caller-supplied reduction over a full sample series
pub type Reducer = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A statistic computed over the sample series of one call
#[derive(Clone)]
pub enum Statistic {
    /// Arithmetic mean
    Mean,
    /// Median (interpolated for even run counts)
    Median,
    /// Fastest run
    Min,
    /// Slowest run
    Max,
    /// Sample standard deviation; dropped when only one run is configured
    Stdev,
    /// Sum of all runs
    Total,
    /// Named caller-supplied reducer
    Custom {
        /// Report key
        name: String,
        /// Reduction function
        reducer: Reducer,
    },
}

impl Statistic {
    /// Names accepted by [`Statistic::from_str`]
    pub const NAMES: [&'static str; 6] = ["mean", "median", "min", "max", "stdev", "total"];

    /// Statistics requested when none are configured
    pub fn defaults() -> Vec<Statistic> {
        vec![
            Statistic::Mean,
            Statistic::Median,
            Statistic::Max,
            Statistic::Min,
            Statistic::Stdev,
            Statistic::Total,
        ]
    }

    /// Register a caller-supplied reducer under `name`
    ///
    /// The name becomes the report key. An empty name is rejected when the
    /// timer is built.
    pub fn custom<F>(name: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Statistic::Custom {
            name: name.into(),
            reducer: Arc::new(reducer),
        }
    }

    /// Key under which this statistic appears in a report
    pub fn name(&self) -> &str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Stdev => "stdev",
            Statistic::Total => "total",
            Statistic::Custom { name, .. } => name,
        }
    }

    /// Reduce a sample series to this statistic's value
    pub fn apply(&self, samples: &[f64]) -> f64 {
        match self {
            Statistic::Mean => callstat_stats::mean(samples),
            Statistic::Median => callstat_stats::median(samples),
            Statistic::Min => callstat_stats::min(samples),
            Statistic::Max => callstat_stats::max(samples),
            Statistic::Stdev => callstat_stats::std_dev(samples),
            Statistic::Total => callstat_stats::total(samples),
            Statistic::Custom { reducer, .. } => reducer(samples),
        }
    }

    pub(crate) fn invalid(name: impl Into<String>) -> TimerError {
        TimerError::InvalidStatistic {
            name: name.into(),
            valid: Self::NAMES.to_vec(),
        }
    }
}

impl FromStr for Statistic {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Statistic::Mean),
            "median" => Ok(Statistic::Median),
            "min" => Ok(Statistic::Min),
            "max" => Ok(Statistic::Max),
            "stdev" => Ok(Statistic::Stdev),
            "total" => Ok(Statistic::Total),
            other => Err(Self::invalid(other)),
        }
    }
}

impl fmt::Debug for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Custom { name, .. } => f.debug_tuple("Custom").field(name).finish(),
            other => f.write_str(other.name()),
        }
    }
}
