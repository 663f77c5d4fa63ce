//! Wall-Clock Timing
//!
//! Monotonic stopwatch over `std::time::Instant`.

use std::time::{Duration, Instant};

/// Stopwatch for timing a single run
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since start
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time since start, in seconds
    #[inline(always)]
    pub fn stop_secs(&self) -> f64 {
        self.stop().as_secs_f64()
    }
}
