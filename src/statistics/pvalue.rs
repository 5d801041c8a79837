use super::errors::{ensure_finite_non_empty, Result, StatsError};
use statrs::distribution::{ContinuousCDF, Normal};

/// Reference normal distribution for [`two_tailed_pvalue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalReference {
    /// Mean of the normal distribution.
    pub mu: f64,
    /// Standard deviation of the normal distribution. Must be strictly positive.
    pub sigma: f64,
}

impl Default for NormalReference {
    fn default() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }
}

impl NormalReference {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    fn validate(&self) -> Result<()> {
        if !self.mu.is_finite() {
            return Err(StatsError::InvalidInput(format!(
                "mean must be finite, got {}",
                self.mu
            )));
        }

        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(StatsError::InvalidInput(format!(
                "standard deviation must be strictly positive, got {}",
                self.sigma
            )));
        }

        Ok(())
    }

    fn distribution(&self) -> Result<Normal> {
        self.validate()?;
        Normal::new(self.mu, self.sigma).map_err(|e| StatsError::InvalidInput(e.to_string()))
    }
}

/// `2 * Φ(-|value - mu| / sigma)`, evaluated on the reference distribution itself.
fn pvalue_with(normal: &Normal, value: f64, mu: f64) -> f64 {
    2.0 * normal.cdf(mu - (value - mu).abs())
}

/// Two-tailed p-value of `value` under a normal distribution:
/// `2 * Φ(-|value - mu| / sigma)`.
///
/// # Returns
/// * `Ok(f64)` - Probability of observing a deviation from `mu` at least as extreme.
/// * `Err(StatsError::InvalidInput)` - If `sigma <= 0`, or any input is non-finite.
pub fn two_tailed_pvalue(value: f64, reference: &NormalReference) -> Result<f64> {
    let normal = reference.distribution()?;
    if !value.is_finite() {
        return Err(StatsError::InvalidInput(format!(
            "value must be finite, got {}",
            value
        )));
    }

    Ok(pvalue_with(&normal, value, reference.mu))
}

/// Elementwise [`two_tailed_pvalue`] over a slice.
///
/// # Returns
/// * `Ok(Vec<f64>)` - One p-value per input value, in order.
/// * `Err(StatsError::InvalidInput)` - If `data` is empty or non-finite, or `sigma <= 0`.
pub fn two_tailed_pvalues(data: &[f64], reference: &NormalReference) -> Result<Vec<f64>> {
    let normal = reference.distribution()?;
    ensure_finite_non_empty(data, "p-value data")?;

    Ok(data
        .iter()
        .map(|&value| pvalue_with(&normal, value, reference.mu))
        .collect())
}
