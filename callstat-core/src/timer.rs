//! Measurement Wrapper
//!
//! A [`CallTimer`] holds a validated configuration: run count, reporting options
//! and the bound statistics. [`CallTimer::wrap`] turns a function into a
//! [`Timed`] wrapper. Each call of the wrapper runs the function `runs` times,
//! timing every run. It then reduces the timings into a fresh [`Report`] and
//! returns the last run's value together with that report.

use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::measure::Stopwatch;
use crate::statistic::Statistic;
use callstat_report::{Report, format_human_output};
use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validated timer configuration
///
/// Cheap to clone; the bound statistics are shared.
#[derive(Clone)]
pub struct CallTimer {
    runs: NonZeroUsize,
    print_report: bool,
    round_floats: Option<u32>,
    metrics: Arc<[Statistic]>,
}

/// Builder for [`CallTimer`]
///
/// Statistics are resolved in [`CallTimerBuilder::build`], so an unknown name
/// fails before anything is measured.
#[derive(Debug, Clone)]
pub struct CallTimerBuilder {
    runs: usize,
    print_report: bool,
    round_floats: Option<u32>,
    requested: Option<Vec<Requested>>,
}

#[derive(Debug, Clone)]
enum Requested {
    Name(String),
    Stat(Statistic),
}

impl CallTimer {
    /// Timer with `runs` runs, printing enabled, no rounding and the default statistics
    pub fn new(runs: usize) -> Result<Self, TimerError> {
        Self::builder(runs).build()
    }

    /// Start building a timer with `runs` runs
    pub fn builder(runs: usize) -> CallTimerBuilder {
        CallTimerBuilder {
            runs,
            print_report: true,
            round_floats: None,
            requested: None,
        }
    }

    /// Build a timer from a loaded configuration
    pub fn from_config(config: &TimerConfig) -> Result<Self, TimerError> {
        Self::builder(config.runs)
            .print_report(config.print_report)
            .round_floats(config.round_floats)
            .stats(config.stats.iter().cloned())
            .build()
    }

    /// Runs per call
    pub fn runs(&self) -> usize {
        self.runs.get()
    }

    /// Whether a report is printed after every call
    pub fn prints_report(&self) -> bool {
        self.print_report
    }

    /// Decimal places used when printing
    pub fn round_floats(&self) -> Option<u32> {
        self.round_floats
    }

    /// Bound statistics, in report order
    pub fn metrics(&self) -> &[Statistic] {
        &self.metrics
    }

    /// Wrap `func` so that each call is timed `runs` times
    ///
    /// `name` heads the printed report and is stored in every [`Report`].
    pub fn wrap<F>(&self, name: impl Into<String>, func: F) -> Timed<F> {
        Timed {
            name: name.into(),
            func,
            timer: self.clone(),
        }
    }

    /// Time `runs` runs and reduce them into a report
    ///
    /// `prepare` builds the input for a run and is excluded from the timing.
    /// The first `Err` from `run` stops the batch and is returned as is.
    fn measure<I, R, E>(
        &self,
        function: &str,
        mut prepare: impl FnMut() -> I,
        mut run: impl FnMut(I) -> Result<R, E>,
    ) -> Result<(R, Report), E> {
        let runs = self.runs.get();
        let mut samples = Vec::with_capacity(runs);

        // Only the final run's value is returned
        let mut last = time_run(function, &mut samples, &mut prepare, &mut run)?;
        for _ in 1..runs {
            last = time_run(function, &mut samples, &mut prepare, &mut run)?;
        }

        let report = self.summarize(function, samples);
        if let Err(err) = self.emit(&report, &mut io::stdout().lock()) {
            warn!(function, error = %err, "failed to print timing report");
        }

        Ok((last, report))
    }

    /// Write the human-readable report to `out` when printing is enabled
    fn emit(&self, report: &Report, out: &mut impl Write) -> io::Result<()> {
        if !self.print_report {
            return Ok(());
        }
        out.write_all(format_human_output(report, self.round_floats).as_bytes())?;
        out.flush()
    }

    fn summarize(&self, function: &str, samples: Vec<f64>) -> Report {
        let mut report = Report::new(function, samples);
        for stat in self.metrics.iter() {
            let value = stat.apply(&report.samples);
            report.insert(stat.name(), value);
        }
        info!(function, runs = report.runs, metrics = report.len(), "timing report ready");
        report
    }
}

#[inline]
fn time_run<I, R, E>(
    function: &str,
    samples: &mut Vec<f64>,
    prepare: &mut impl FnMut() -> I,
    run: &mut impl FnMut(I) -> Result<R, E>,
) -> Result<R, E> {
    let input = prepare();
    let watch = Stopwatch::start();
    let result = run(input);
    let elapsed = watch.stop_secs();

    let value = result?;
    samples.push(elapsed);
    debug!(function, run = samples.len(), elapsed_secs = elapsed, "run complete");
    Ok(value)
}

impl fmt::Debug for CallTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallTimer")
            .field("runs", &self.runs)
            .field("print_report", &self.print_report)
            .field("round_floats", &self.round_floats)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl CallTimerBuilder {
    /// Print the human-readable report after every call (default: true)
    pub fn print_report(mut self, enabled: bool) -> Self {
        self.print_report = enabled;
        self
    }

    /// Round printed values to `places` decimal places (default: no rounding)
    pub fn round_floats(mut self, places: Option<u32>) -> Self {
        self.round_floats = places;
        self
    }

    /// Replace the requested statistics with well-known names
    pub fn stats<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requested = Some(names.into_iter().map(|n| Requested::Name(n.into())).collect());
        self
    }

    /// Append a statistic, typically a [`Statistic::custom`] reducer
    ///
    /// Appends to the default statistics unless [`stats`](Self::stats) was called first.
    pub fn statistic(mut self, stat: Statistic) -> Self {
        self.requested
            .get_or_insert_with(|| Statistic::defaults().into_iter().map(Requested::Stat).collect())
            .push(Requested::Stat(stat));
        self
    }

    /// Validate the configuration and bind the statistics
    pub fn build(self) -> Result<CallTimer, TimerError> {
        let runs = NonZeroUsize::new(self.runs).ok_or(TimerError::InvalidRuns(self.runs))?;

        let requested = match self.requested {
            Some(requested) => requested,
            None => Statistic::defaults().into_iter().map(Requested::Stat).collect(),
        };

        let mut metrics: Vec<Statistic> = Vec::with_capacity(requested.len());
        for entry in requested {
            let stat = match entry {
                Requested::Name(name) => name.parse::<Statistic>()?,
                Requested::Stat(stat) => stat,
            };
            if stat.name().is_empty() {
                return Err(Statistic::invalid(""));
            }
            // A repeated name keeps its first position and takes the later reducer
            match metrics.iter_mut().find(|m| m.name() == stat.name()) {
                Some(slot) => *slot = stat,
                None => metrics.push(stat),
            }
        }

        if runs.get() == 1 {
            metrics.retain(|m| m.name() != "stdev");
        }

        debug!(runs = runs.get(), metrics = ?metrics, "timer configured");

        Ok(CallTimer {
            runs,
            print_report: self.print_report,
            round_floats: self.round_floats,
            metrics: metrics.into(),
        })
    }
}

/// A function wrapped by a [`CallTimer`]
///
/// Holds no per-call state: every call returns its own [`Report`]. Clone the
/// wrapper (when `F: Clone`) to use it from several threads.
#[derive(Clone)]
pub struct Timed<F> {
    name: String,
    func: F,
    timer: CallTimer,
}

impl<F> Timed<F> {
    /// Name used in reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration this wrapper runs with
    pub fn timer(&self) -> &CallTimer {
        &self.timer
    }

    /// Recover the wrapped function
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Time a nullary function
    pub fn run<R>(&mut self) -> (R, Report)
    where
        F: FnMut() -> R,
    {
        let func = &mut self.func;
        let outcome = self
            .timer
            .measure(&self.name, || (), |()| Ok::<R, Infallible>(func()));
        match outcome {
            Ok(done) => done,
            Err(never) => match never {},
        }
    }

    /// Time a function of one argument
    ///
    /// Every run receives its own clone of `args`; the clone happens before the
    /// clock starts. Use a tuple for several arguments.
    pub fn call<A, R>(&mut self, args: A) -> (R, Report)
    where
        F: FnMut(A) -> R,
        A: Clone,
    {
        let func = &mut self.func;
        let outcome = self.timer.measure(
            &self.name,
            || args.clone(),
            |input| Ok::<R, Infallible>(func(input)),
        );
        match outcome {
            Ok(done) => done,
            Err(never) => match never {},
        }
    }

    /// Time a fallible function
    ///
    /// The first error aborts the remaining runs and is returned unchanged; no
    /// report is produced for that call.
    pub fn try_call<A, R, E>(&mut self, args: A) -> Result<(R, Report), E>
    where
        F: FnMut(A) -> Result<R, E>,
        A: Clone,
    {
        let func = &mut self.func;
        self.timer.measure(&self.name, || args.clone(), func)
    }
}

impl<F> fmt::Debug for Timed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timed")
            .field("name", &self.name)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
