#![warn(missing_docs)]
//! # callstat
//!
//! Call-timing instrumentation for ad-hoc micro-benchmarking during development.
//!
//! Wrap a function once, then every call runs it a fixed number of times,
//! times each run, and returns the last run's value together with a report:
//! - **Built-in statistics**: mean, median, min, max, stdev, total
//! - **Custom reducers**: any named `Fn(&[f64]) -> f64`
//! - **Terminal report**: optional, with rounding and a `μ ± σ` summary line
//! - **JSON export**: reports keep the requested metric order
//! - **Config file**: defaults can live in `callstat.toml`
//!
//! ## Quick Start
//!
//! ```no_run
//! use callstat::prelude::*;
//!
//! fn fib(n: u64) -> u64 {
//!     let (mut f, mut s) = (0u64, 1u64);
//!     for _ in 0..n {
//!         (f, s) = (s, f.wrapping_add(s));
//!     }
//!     f
//! }
//!
//! let timer = CallTimer::builder(3).round_floats(Some(4)).build()?;
//! let mut timed = timer.wrap("fib", fib);
//! let (value, report) = timed.call(90);
//! println!("fib(90) = {value}, total {:.6}s", report["total"]);
//! # Ok::<(), callstat::TimerError>(())
//! ```
//!
//! ## Custom Statistics
//!
//! ```no_run
//! use callstat::prelude::*;
//!
//! let timer = CallTimer::builder(5)
//!     .stats(["mean", "min", "max"])
//!     .statistic(Statistic::custom("range_stat", |s: &[f64]| {
//!         callstat::stats::max(s) - callstat::stats::min(s)
//!     }))
//!     .build()?;
//! # Ok::<(), callstat::TimerError>(())
//! ```

// Re-export core types
pub use callstat_core::{
    CONFIG_FILE_NAME, CallTimer, CallTimerBuilder, DEFAULT_RUNS, Reducer, Statistic, Stopwatch,
    Timed, TimerConfig, TimerError,
};

// Re-export report types
pub use callstat_report::{OutputFormat, Report, format_human_output, generate_json_report};

/// Reduction functions usable as custom statistics
pub mod stats {
    pub use callstat_stats::{compute_percentile, max, mean, median, min, std_dev, total};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CallTimer, Report, Statistic, Timed, TimerConfig, TimerError};
}
