//! Percentile Computation
//!
//! Linear interpolation between nearest ranks. The median reducer is the
//! 50th percentile of this scheme, which matches the usual "mean of the two
//! middle values" definition for even-length series.

/// Compute a single percentile from samples
///
/// # Examples
///
/// ```
/// # use callstat_stats::compute_percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&samples, 50.0), 2.5);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    if samples.len() == 1 {
        return samples[0];
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let p = (percentile / 100.0).clamp(0.0, 1.0);

    let rank = p * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(n - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        let samples = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_even_interpolates() {
        let samples = vec![4.0, 1.0, 3.0, 2.0];
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let samples: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_eq!(compute_percentile(&samples, 0.0), 1.0);
        assert_eq!(compute_percentile(&samples, 100.0), 10.0);
        // Out-of-range percentiles clamp to the extremes
        assert_eq!(compute_percentile(&samples, 150.0), 10.0);
    }

    #[test]
    fn test_single_sample() {
        let samples = vec![42.0];
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_samples() {
        let samples: Vec<f64> = Vec::new();
        let p50 = compute_percentile(&samples, 50.0);
        assert!((p50 - 0.0).abs() < f64::EPSILON);
    }
}
