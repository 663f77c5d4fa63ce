#![warn(missing_docs)]
//! callstat Statistical Reductions
//!
//! Every function here reduces a full sample series (elapsed seconds, one
//! entry per run) to a single scalar:
//! - Central tendency: mean, median
//! - Extremes: min, max
//! - Spread: sample standard deviation
//! - Total elapsed time across all runs

mod percentiles;
mod reduce;

pub use percentiles::compute_percentile;
pub use reduce::{max, mean, median, min, std_dev, total};

/// Minimum number of samples for which a sample standard deviation is defined
pub const MIN_STDDEV_SAMPLES: usize = 2;
