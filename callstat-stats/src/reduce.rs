//! Sample Series Reducers
//!
//! All reducers return `0.0` for an empty series.

use crate::MIN_STDDEV_SAMPLES;
use crate::percentiles::compute_percentile;

/// Arithmetic mean
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    total(samples) / samples.len() as f64
}

/// Median (50th percentile, interpolated for even counts)
pub fn median(samples: &[f64]) -> f64 {
    compute_percentile(samples, 50.0)
}

/// Smallest sample
pub fn min(samples: &[f64]) -> f64 {
    samples.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest sample
pub fn max(samples: &[f64]) -> f64 {
    samples.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Sample standard deviation (n - 1 denominator)
///
/// Undefined for fewer than two samples; returns `0.0` in that case.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < MIN_STDDEV_SAMPLES {
        return 0.0;
    }
    let mean = mean(samples);
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}

/// Sum of all samples
pub fn total(samples: &[f64]) -> f64 {
    samples.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_reductions() {
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        assert!((mean(&samples) - 5.0).abs() < 1e-12);
        assert!((median(&samples) - 4.5).abs() < 1e-12);
        assert_eq!(min(&samples), 2.0);
        assert_eq!(max(&samples), 9.0);
        assert!((total(&samples) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_uses_sample_variance() {
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Population stdev is 2.0; sample stdev is sqrt(32 / 7)
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((std_dev(&samples) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_single_sample() {
        assert_eq!(std_dev(&[0.5]), 0.0);
    }

    #[test]
    fn test_zero_variance() {
        let samples = vec![0.25; 5];
        assert!(std_dev(&samples).abs() < f64::EPSILON);
        assert_eq!(min(&samples), max(&samples));
    }

    #[test]
    fn test_total_is_not_an_average() {
        let samples = vec![0.1, 0.2, 0.3];
        assert!((total(&samples) - 0.6).abs() < 1e-12);
        assert!((mean(&samples) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_samples() {
        let samples: Vec<f64> = Vec::new();
        assert_eq!(mean(&samples), 0.0);
        assert_eq!(median(&samples), 0.0);
        assert_eq!(min(&samples), 0.0);
        assert_eq!(max(&samples), 0.0);
        assert_eq!(std_dev(&samples), 0.0);
        assert_eq!(total(&samples), 0.0);
    }
}
