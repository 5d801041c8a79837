//! Histogramming over logarithmically spaced bins.
//!
//! Abundance data spans several orders of magnitude, so bins of constant width on a log
//! scale are used to estimate its distribution.

use super::errors::{ensure_finite_non_empty, Result, StatsError};
use super::histogram::{histogram, min_max};
use crate::utilities::math::logspace;

/// Default number of bin edges used by [`log_hist`] callers.
pub const DEFAULT_LOG_BINS: usize = 30;

/// Output of [`log_hist`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogHistogram {
    /// Log-spaced bin edges, from `min(data)` to `max(data)`.
    pub bins: Vec<f64>,
    /// Number of data points in each bin. Sums to the number of data points.
    pub counts: Vec<u64>,
    /// Probability of each bin. Sums to 1.
    pub prob: Vec<f64>,
    /// Probability density of each bin. Its area (`pdf * bin width`) sums to 1.
    pub pdf: Vec<f64>,
}

impl LogHistogram {
    /// Widths of the individual bins.
    pub fn widths(&self) -> Vec<f64> {
        self.bins.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}

/// Calculates the log-histogram of a dataset.
///
/// # Arguments
/// * `data` - Strictly positive values with at least 2 distinct values.
/// * `nbins` - Number of log-spaced bin edges (yielding `nbins - 1` bins). Must be at least 2.
///
/// # Returns
/// * `Ok(LogHistogram)` - Edges, counts, probabilities and densities.
/// * `Err(StatsError::InvalidInput)` - If the data is empty, non-positive, non-finite,
///   constant, or `nbins < 2`.
pub fn log_hist(data: &[f64], nbins: usize) -> Result<LogHistogram> {
    ensure_finite_non_empty(data, "log-histogram data")?;

    if nbins < 2 {
        return Err(StatsError::InvalidInput(format!(
            "log-histogram needs at least 2 bin edges, got {}",
            nbins
        )));
    }

    if let Some(value) = data.iter().find(|&&value| value <= 0.0) {
        return Err(StatsError::InvalidInput(format!(
            "log-histogram data must be strictly positive, found {}",
            value
        )));
    }

    // Non-empty was checked above.
    let (min, max) = min_max(data).unwrap_or_default();
    if min == max {
        return Err(StatsError::InvalidInput(
            "log-histogram data needs at least 2 distinct values".to_string(),
        ));
    }

    let mut bins = logspace(min.log10(), max.log10(), nbins);

    // Round-tripping through log10 may nudge the extremes out of range.
    bins[0] = min;
    bins[nbins - 1] = max;

    let counts = histogram(data, &bins);
    let total: u64 = counts.iter().sum();
    let prob: Vec<f64> = counts
        .iter()
        .map(|&count| count as f64 / total as f64)
        .collect();
    let pdf = prob
        .iter()
        .zip(bins.windows(2))
        .map(|(p, pair)| p / (pair[1] - pair[0]))
        .collect();

    Ok(LogHistogram {
        bins,
        counts,
        prob,
        pdf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_data() -> Vec<f64> {
        // Roughly power-law distributed abundances.
        (1..=500).map(|i| (1000.0 / i as f64).powf(1.5)).collect()
    }

    #[test]
    fn probabilities_sum_to_one() {
        let histogram = log_hist(&sample_data(), DEFAULT_LOG_BINS).unwrap();
        let total: f64 = histogram.prob.iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "total = {}", total);
    }

    #[test]
    fn density_integrates_to_one() {
        let histogram = log_hist(&sample_data(), DEFAULT_LOG_BINS).unwrap();
        let area: f64 = histogram
            .pdf
            .iter()
            .zip(histogram.widths())
            .map(|(density, width)| density * width)
            .sum();
        assert!((area - 1.0).abs() < 1e-9, "area = {}", area);
    }

    #[test]
    fn counts_cover_every_point() {
        let data = sample_data();
        let histogram = log_hist(&data, 12).unwrap();

        assert_eq!(histogram.bins.len(), 12);
        assert_eq!(histogram.counts.len(), 11);
        assert_eq!(histogram.counts.iter().sum::<u64>(), data.len() as u64);
    }

    #[test]
    fn edges_are_log_spaced() {
        let histogram = log_hist(&[1.0, 10.0, 100.0, 1000.0], 4).unwrap();
        let expected = [1.0, 10.0, 100.0, 1000.0];
        for (edge, expected) in histogram.bins.iter().zip(expected) {
            assert!((edge - expected).abs() / expected < 1e-12);
        }
        assert_eq!(histogram.counts, vec![1, 1, 2]);
    }

    #[rstest]
    #[case::empty(vec![], 30)]
    #[case::zero(vec![0.0, 1.0, 2.0], 30)]
    #[case::negative(vec![-1.0, 1.0, 2.0], 30)]
    #[case::constant(vec![3.0, 3.0, 3.0], 30)]
    #[case::non_finite(vec![1.0, f64::INFINITY], 30)]
    #[case::too_few_bins(vec![1.0, 2.0], 1)]
    fn invalid_input_is_rejected(#[case] data: Vec<f64>, #[case] nbins: usize) {
        assert!(matches!(
            log_hist(&data, nbins),
            Err(StatsError::InvalidInput(_))
        ));
    }
}
