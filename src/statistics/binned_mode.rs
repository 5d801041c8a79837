use super::errors::{ensure_finite_non_empty, Result, StatsError};
use super::histogram::{histogram, Bins};

/// Estimates the mode of a dataset by binning it and taking the centre of the fullest bin.
///
/// When several bins share the maximum count, the first one (in edge order) wins.
///
/// # Arguments
/// * `data` - Finite values to estimate the mode of.
/// * `bins` - Number of equal-width bins, or explicit edges. See [`Bins`].
///
/// # Returns
/// * `Ok(f64)` - Midpoint of the bin with the highest count.
/// * `Err(StatsError::InvalidInput)` - If `data` is empty or non-finite, the bins are invalid,
///   or no value falls within the bins.
pub fn mode_with_binning(data: &[f64], bins: &Bins) -> Result<f64> {
    ensure_finite_non_empty(data, "mode data")?;

    let edges = bins.edges_for(data)?;
    let counts = histogram(data, &edges);

    let mut index_max = 0;
    for (index, &count) in counts.iter().enumerate() {
        if count > counts[index_max] {
            index_max = index;
        }
    }

    if counts[index_max] == 0 {
        return Err(StatsError::InvalidInput(
            "no value falls within the bin edges".to_string(),
        ));
    }

    Ok((edges[index_max] + edges[index_max + 1]) / 2.0)
}
