//! Output Formatting
//!
//! Human-readable terminal output for a [`Report`]:
//!
//! ```text
//! Report for: fib
//! Mean	:  1.0012
//! Stdev	:  0.0004
//! Approximate running time (μ ± σ) : 1.00 ± 0.00 seconds
//! ```

use crate::report::Report;

/// Format a report for human-readable terminal display
///
/// # Arguments
/// * `report` - Report for one call of a wrapped function
/// * `round_floats` - Decimal places to round metric values to (`None` prints them as is)
pub fn format_human_output(report: &Report, round_floats: Option<u32>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Report for: {}\n", report.function));

    for (name, value) in report.iter() {
        let value = match round_floats {
            Some(places) => round_to(value, places),
            None => value,
        };
        output.push_str(&format!("{}\t:  {}\n", title_case(name), value));
    }

    if let Some((mean, stdev)) = report.approximate_running_time() {
        output.push_str(&format!(
            "Approximate running time (\u{3bc} \u{b1} \u{3c3}) : {:.2} \u{b1} {:.2} seconds\n",
            mean, stdev
        ));
    }

    output
}

/// Round `value` to `places` decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Title-case a metric name
///
/// Each run of letters starts upper-case and continues lower-case, so
/// `range_stat` becomes `Range_Stat` and `p99` becomes `P99`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(metrics: &[(&str, f64)]) -> Report {
        let mut report = Report::new("fib", vec![1.0, 1.0, 1.0]);
        for (name, value) in metrics {
            report.insert(*name, *value);
        }
        report
    }

    #[test]
    fn test_header_and_lines() {
        let output = format_human_output(&report(&[("mean", 1.5), ("total", 4.5)]), None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Report for: fib");
        assert_eq!(lines[1], "Mean\t:  1.5");
        assert_eq!(lines[2], "Total\t:  4.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_rounding() {
        let output = format_human_output(&report(&[("mean", 1.23456)]), Some(2));
        assert!(output.contains("Mean\t:  1.23\n"));

        let unrounded = format_human_output(&report(&[("mean", 1.23456)]), None);
        assert!(unrounded.contains("Mean\t:  1.23456\n"));
    }

    #[test]
    fn test_running_time_line() {
        let output = format_human_output(&report(&[("mean", 1.004), ("stdev", 0.0213)]), Some(6));
        assert!(
            output.ends_with("Approximate running time (μ ± σ) : 1.00 ± 0.02 seconds\n"),
            "{output}"
        );
    }

    #[test]
    fn test_running_time_line_needs_both() {
        let output = format_human_output(&report(&[("mean", 1.0)]), None);
        assert!(!output.contains("Approximate running time"));

        let output = format_human_output(&report(&[("stdev", 1.0)]), None);
        assert!(!output.contains("Approximate running time"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mean"), "Mean");
        assert_eq!(title_case("range_stat"), "Range_Stat");
        assert_eq!(title_case("p99"), "P99");
        assert_eq!(title_case("STDEV"), "Stdev");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(1.0, 400), 1.0);
    }

    #[test]
    fn test_round_to_large_value_stays_finite() {
        assert_eq!(round_to(1e300, 10), 1e300);

        let output = format_human_output(&report(&[("big", 1e300)]), Some(10));
        assert!(output.contains("Big\t:  "));
        assert!(!output.contains("inf"), "{output}");
    }

    #[test]
    fn test_display_matches_unrounded_output() {
        let report = report(&[("mean", 0.5)]);
        assert_eq!(report.to_string(), format_human_output(&report, None));
    }
}
