//! Maximum-likelihood fitting of a power-law exponent.
//!
//! The fitted model is the power-law distribution on `[0, 1]` with shape `rho`:
//! `F(x) = x^rho`. Goodness of fit is checked with a one-sample Kolmogorov–Smirnov test.

use super::errors::{ensure_finite_non_empty, Result, StatsError};
use crate::utilities::kolmogorov::{ks_one_sample, KsResult};
use crate::utilities::math::mean;

/// Outcome of [`maximum_likelihood_exponent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    /// Maximum-likelihood exponent, `1 / mean(ln x)` over the strictly positive values.
    pub rho: f64,
    /// Kolmogorov–Smirnov `D` statistic. `NaN` if `rho` is not a valid shape.
    pub statistic: f64,
    /// Kolmogorov–Smirnov p-value. `NaN` if `rho` is not a valid shape.
    pub pvalue: f64,
}

impl PowerLawFit {
    /// Returns `true` if the power-law hypothesis is rejected at the `significance` level.
    ///
    /// An undefined p-value never rejects.
    pub fn rejects_at(&self, significance: f64) -> bool {
        self.pvalue < significance
    }
}

/// Cumulative distribution function of the power law on `[0, 1]` with shape `rho`.
///
/// Returns `NaN` for shapes outside `(0, ∞)`.
pub fn power_law_cdf(x: f64, rho: f64) -> f64 {
    if !(rho.is_finite() && rho > 0.0) {
        return f64::NAN;
    }

    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        x.powf(rho)
    }
}

/// Estimates the maximum-likelihood power-law exponent of a dataset.
///
/// Non-positive values are excluded from the fit, but the goodness-of-fit test is run
/// against the full input.
///
/// # Arguments
/// * `data` - The data to fit.
///
/// # Returns
/// * `Ok(PowerLawFit)` - The exponent and the Kolmogorov–Smirnov test outcome.
/// * `Err(StatsError::InvalidInput)` - If `data` is empty, non-finite, or has no strictly
///   positive values.
pub fn maximum_likelihood_exponent(data: &[f64]) -> Result<PowerLawFit> {
    ensure_finite_non_empty(data, "power-law data")?;

    let logs: Vec<f64> = data
        .iter()
        .filter(|&&value| value > 0.0)
        .map(|value| value.ln())
        .collect();

    let mean_log = mean(&logs).ok_or_else(|| {
        StatsError::InvalidInput("power-law data has no strictly positive values".to_string())
    })?;

    let rho = 1.0 / mean_log;
    let KsResult { statistic, pvalue } = ks_one_sample(data, |x| power_law_cdf(x, rho));

    Ok(PowerLawFit {
        rho,
        statistic,
        pvalue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn exponent_is_inverse_mean_log() {
        let e = core::f64::consts::E;
        let fit = maximum_likelihood_exponent(&[e, e * e, e * e * e]).unwrap();
        // mean(ln x) = 2
        assert!((fit.rho - 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_positive_values_are_excluded_from_fit() {
        let e = core::f64::consts::E;
        let with_zeros = maximum_likelihood_exponent(&[0.0, e, -3.0, e * e * e]).unwrap();
        let without = maximum_likelihood_exponent(&[e, e * e * e]).unwrap();
        assert_eq!(with_zeros.rho, without.rho);
    }

    #[test]
    fn data_above_one_has_undefined_pvalue() {
        // ln(x) > 0 for every value, so rho is positive but the test still runs.
        let fit = maximum_likelihood_exponent(&[2.0, 4.0, 8.0]).unwrap();
        assert!(fit.rho > 0.0);
        // Every value is beyond the support, the ECDF and CDF disagree maximally.
        assert!((fit.statistic - 1.0).abs() < 1e-12);
        assert_eq!(fit.pvalue, 0.0);
        assert!(fit.rejects_at(0.05));
    }

    #[test]
    fn negative_shape_yields_nan_test() {
        // Values in (0, 1) have negative logs, so rho < 0.
        let fit = maximum_likelihood_exponent(&[0.1, 0.2, 0.5]).unwrap();
        assert!(fit.rho < 0.0);
        assert!(fit.statistic.is_nan());
        assert!(fit.pvalue.is_nan());
        assert!(!fit.rejects_at(0.05));
    }

    #[rstest]
    #[case(-1.0, 2.0, 0.0)]
    #[case(0.25, 0.5, 0.5)]
    #[case(1.0, 3.0, 1.0)]
    #[case(4.0, 3.0, 1.0)]
    fn cdf_values(#[case] x: f64, #[case] rho: f64, #[case] expected: f64) {
        assert!((power_law_cdf(x, rho) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::no_positive(vec![0.0, -1.0])]
    #[case::nan(vec![1.0, f64::NAN])]
    fn invalid_input_is_rejected(#[case] data: Vec<f64>) {
        assert!(matches!(
            maximum_likelihood_exponent(&data),
            Err(StatsError::InvalidInput(_))
        ));
    }
}
