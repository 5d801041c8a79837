/// Returns `num` values spaced evenly on a log scale, from `10^start` to `10^stop` (inclusive).
///
/// The exponents are spaced linearly, matching how numerical libraries usually define
/// `logspace`. When `num == 1`, only `10^start` is returned.
///
/// # Arguments
/// * `start` - Base-10 exponent of the first value.
/// * `stop` - Base-10 exponent of the last value.
/// * `num` - Number of values to produce.
pub fn logspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    linspace(start, stop, num)
        .into_iter()
        .map(|exponent| 10f64.powf(exponent))
        .collect()
}

/// Returns `num` values spaced evenly over the closed interval `[start, stop]`.
///
/// The last value is always exactly `stop` (when `num > 1`).
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut result: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            result[num - 1] = stop;
            result
        }
    }
}

/// Arithmetic mean of a slice. Returns [`None`] for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn logspace_produces_decades() {
        let values = logspace(-7.0, -1.0, 7);
        let expected = [1e-7, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1];

        assert_eq!(values.len(), expected.len());
        for (value, expected) in values.iter().zip(expected) {
            assert!(
                ((value - expected) / expected).abs() < 1e-12,
                "{} != {}",
                value,
                expected
            );
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(5, 5)]
    fn linspace_has_requested_length(#[case] num: usize, #[case] expected_len: usize) {
        assert_eq!(linspace(0.0, 1.0, num).len(), expected_len);
    }

    #[test]
    fn linspace_hits_endpoints_exactly() {
        let values = linspace(0.1, 0.7, 7);
        assert_eq!(values[0], 0.1);
        assert_eq!(values[6], 0.7);
    }

    #[test]
    fn mean_of_empty_slice_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }
}
