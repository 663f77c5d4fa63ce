//! Time a slow Fibonacci function three times and print the report.
//!
//! ```text
//! cargo run -p callstat --example fib
//! cargo run -p callstat --example fib -- json
//! RUST_LOG=callstat=debug cargo run -p callstat --example fib
//! ```
//!
//! A `callstat.toml` found in the current directory or any parent overrides
//! the defaults used here.

use callstat::OutputFormat;
use callstat::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn fib(n: u32) -> u128 {
    std::thread::sleep(Duration::from_millis(100));
    let (mut f, mut s) = (0u128, 1u128);
    for _ in 0..n {
        (f, s) = (s, f + s);
    }
    f
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("callstat=info")),
        )
        .init();

    let format: OutputFormat = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        None => OutputFormat::Human,
    };

    let mut config = TimerConfig::discover().unwrap_or(TimerConfig {
        runs: 3,
        ..TimerConfig::default()
    });
    // JSON output replaces the printed report
    config.print_report &= format == OutputFormat::Human;
    let timer = CallTimer::from_config(&config)?;

    let mut timed = timer.wrap("fib", fib);
    let (result, report) = timed.call(100);

    match format {
        OutputFormat::Human => println!("{result}"),
        OutputFormat::Json => println!("{}", callstat::generate_json_report(&report)?),
    }
    Ok(())
}
