//! Errors raised while configuring a timer

use std::path::PathBuf;
use thiserror::Error;

/// Errors from building a [`CallTimer`](crate::CallTimer)
///
/// Failures of the wrapped function itself are never converted into this type;
/// they reach the caller unchanged.
#[derive(Debug, Error)]
pub enum TimerError {
    /// Requested statistic is not one of the known names, or a custom one has no name
    #[error("No such statistic {name:?}, available statistics: {}", .valid.join(", "))]
    InvalidStatistic {
        /// The offending entry
        name: String,
        /// Names accepted by the statistic table
        valid: Vec<&'static str>,
    },

    /// Run count must be positive
    #[error("Invalid run count: {0} (must be at least 1)")]
    InvalidRuns(usize),

    /// Configuration file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigIo {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a timer
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
