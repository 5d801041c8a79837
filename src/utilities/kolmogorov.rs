//! One-sample Kolmogorov–Smirnov test against a known cumulative distribution.
//!
//! The two-sided p-value is taken from the distribution of `D_n`:
//! - For moderate sample sizes the exact Marsaglia–Tsang–Wang matrix method is used.
//! - Otherwise (or when `n·d²` is large) the Stephens-corrected asymptotic series of the
//!   Kolmogorov distribution is used.

/// Sample sizes above this use the asymptotic series; the exact method is `O(n·d)³`.
const EXACT_MAX_SAMPLES: usize = 1000;

/// Rescaling threshold used to keep the matrix power within `f64` range.
const RESCALE: f64 = 1e140;
const RESCALE_EXPONENT: i32 = 140;

/// Result of a one-sample Kolmogorov–Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsResult {
    /// The `D` statistic: largest absolute gap between the ECDF and the reference CDF.
    pub statistic: f64,
    /// Two-sided p-value of `statistic` under the null hypothesis.
    pub pvalue: f64,
}

/// Performs a two-sided one-sample KS test of `data` against the reference `cdf`.
///
/// # Arguments
/// * `data` - Observations, in any order. Must not be empty.
/// * `cdf` - Reference cumulative distribution function.
///
/// # Returns
/// [`KsResult`] with `NaN` statistic and p-value if `cdf` yields `NaN` for any observation.
pub fn ks_one_sample(data: &[f64], cdf: impl Fn(f64) -> f64) -> KsResult {
    let n = data.len();
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut d_plus = f64::MIN;
    let mut d_minus = f64::MIN;
    for (i, &x) in sorted.iter().enumerate() {
        let f = cdf(x);
        if f.is_nan() {
            return KsResult {
                statistic: f64::NAN,
                pvalue: f64::NAN,
            };
        }

        d_plus = d_plus.max((i + 1) as f64 / n as f64 - f);
        d_minus = d_minus.max(f - i as f64 / n as f64);
    }

    let statistic = d_plus.max(d_minus);
    KsResult {
        statistic,
        pvalue: kolmogorov_sf(n, statistic),
    }
}

/// Survival function of the two-sided KS statistic: `P(D_n >= d)`.
pub fn kolmogorov_sf(n: usize, d: f64) -> f64 {
    if n == 0 || d.is_nan() {
        return f64::NAN;
    }
    if d <= 0.0 {
        return 1.0;
    }
    if d >= 1.0 {
        return 0.0;
    }

    let s = d * d * n as f64;
    let sqrt_n = (n as f64).sqrt();

    // Marsaglia et al.: beyond these bounds the tail formula is accurate to ~7 digits.
    if s > 7.24 || (s > 3.76 && n > 99) {
        let p = 2.0 * (-(2.000071 + 0.331 / sqrt_n + 1.409 / n as f64) * s).exp();
        return p.clamp(0.0, 1.0);
    }

    if n <= EXACT_MAX_SAMPLES {
        (1.0 - marsaglia_tsang_wang_cdf(n, d)).clamp(0.0, 1.0)
    } else {
        asymptotic_sf(n, d)
    }
}

/// Kolmogorov series with the Stephens small-sample correction.
fn asymptotic_sf(n: usize, d: f64) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    let arg = lambda * lambda;

    let mut sum = 0.0;
    for i in 1..100 {
        let exponent = -2.0 * (i * i) as f64 * arg;
        if exponent < -45.0 {
            break;
        }

        let term = exponent.exp();
        if i % 2 == 1 {
            sum += term;
        } else {
            sum -= term;
        }
    }

    (2.0 * sum).clamp(0.0, 1.0)
}

/// Exact `P(D_n < d)` from Marsaglia, Tsang & Wang (2003), "Evaluating Kolmogorov's distribution".
fn marsaglia_tsang_wang_cdf(n: usize, d: f64) -> f64 {
    let nd = n as f64 * d;
    let k = nd.floor() as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nd;

    let mut matrix = vec![0.0; m * m];
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                matrix[i * m + j] = 1.0;
            }
        }
    }

    for i in 0..m {
        matrix[i * m] -= h.powi(i as i32 + 1);
        matrix[(m - 1) * m + i] -= h.powi((m - i) as i32);
    }

    if 2.0 * h - 1.0 > 0.0 {
        matrix[(m - 1) * m] += (2.0 * h - 1.0).powi(m as i32);
    }

    for i in 0..m {
        for j in 0..m {
            if i + 1 > j {
                for g in 1..=(i + 1 - j) {
                    matrix[i * m + j] /= g as f64;
                }
            }
        }
    }

    let (power, mut exponent) = matrix_power(&matrix, 0, m, n);
    let mut s = power[(k - 1) * m + k - 1];
    for i in 1..=n {
        s = s * i as f64 / n as f64;
        if s < 1.0 / RESCALE {
            s *= RESCALE;
            exponent -= RESCALE_EXPONENT;
        }
    }

    s * 10f64.powi(exponent)
}

fn matrix_multiply(a: &[f64], b: &[f64], m: usize) -> Vec<f64> {
    let mut result = vec![0.0; m * m];
    for i in 0..m {
        for k in 0..m {
            let a_ik = a[i * m + k];
            if a_ik == 0.0 {
                continue;
            }
            for j in 0..m {
                result[i * m + j] += a_ik * b[k * m + j];
            }
        }
    }
    result
}

/// Raises `matrix` to `power`, tracking a base-10 exponent to avoid overflow.
fn matrix_power(matrix: &[f64], exponent: i32, m: usize, power: usize) -> (Vec<f64>, i32) {
    if power == 1 {
        return (matrix.to_vec(), exponent);
    }

    let (half, half_exponent) = matrix_power(matrix, exponent, m, power / 2);
    let squared = matrix_multiply(&half, &half, m);
    let squared_exponent = 2 * half_exponent;

    let (mut result, mut result_exponent) = if power % 2 == 0 {
        (squared, squared_exponent)
    } else {
        (
            matrix_multiply(matrix, &squared, m),
            exponent + squared_exponent,
        )
    };

    if result[(m / 2) * m + (m / 2)] > RESCALE {
        for value in result.iter_mut() {
            *value /= RESCALE;
        }
        result_exponent += RESCALE_EXPONENT;
    }

    (result, result_exponent)
}
