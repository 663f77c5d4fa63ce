#![warn(missing_docs)]
//! callstat Report - Per-call timing reports
//!
//! A [`Report`] is produced fresh by every call of a wrapped function. It can be
//! rendered as:
//! - Human-readable terminal output
//! - JSON (machine-readable)

mod format;
mod json;
mod report;

pub use format::{format_human_output, round_to, title_case};
pub use json::generate_json_report;
pub use report::Report;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
