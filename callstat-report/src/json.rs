//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Metric values serialize as an object whose keys keep request order.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
