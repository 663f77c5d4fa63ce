#![warn(missing_docs)]
//! callstat Core - Measurement Wrapper
//!
//! This crate provides the measuring side of callstat:
//! - `CallTimer` configuration, built once and validated up front
//! - `Timed` wrappers that run a function `runs` times and reduce the timings
//! - A static table of well-known statistics plus named custom reducers
//! - `callstat.toml` configuration loading

mod config;
mod error;
mod measure;
mod statistic;
mod timer;

pub use config::{CONFIG_FILE_NAME, TimerConfig};
pub use error::TimerError;
pub use measure::Stopwatch;
pub use statistic::{Reducer, Statistic};
pub use timer::{CallTimer, CallTimerBuilder, Timed};

/// Run count used when none is configured
pub const DEFAULT_RUNS: usize = 10;
