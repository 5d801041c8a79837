//! Shared binning routines used by the histogram based estimators.
//!
//! Bins follow the usual convention: every bin is half-open `[left, right)`, except the
//! last one which also includes its right edge. Values outside the edges are not counted.

use super::errors::{Result, StatsError};
use crate::utilities::math::linspace;

/// Describes how a dataset should be binned.
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    /// Number of equal-width bins spanning the range of the data.
    Count(usize),
    /// Explicit, monotonically increasing bin edges.
    Edges(Vec<f64>),
}

impl Default for Bins {
    fn default() -> Self {
        Bins::Count(10)
    }
}

impl From<usize> for Bins {
    fn from(count: usize) -> Self {
        Bins::Count(count)
    }
}

impl From<Vec<f64>> for Bins {
    fn from(edges: Vec<f64>) -> Self {
        Bins::Edges(edges)
    }
}

impl Bins {
    /// Resolves this bin specification into explicit edges for `data`.
    ///
    /// `data` is expected to be non-empty and finite.
    pub fn edges_for(&self, data: &[f64]) -> Result<Vec<f64>> {
        match self {
            Bins::Count(count) => uniform_edges(data, *count),
            Bins::Edges(edges) => {
                validate_edges(edges)?;
                Ok(edges.clone())
            }
        }
    }
}

/// Computes `count + 1` equal-width edges spanning `[min(data), max(data)]`.
///
/// If all values are equal, the range is widened to `[value - 0.5, value + 0.5]`.
pub fn uniform_edges(data: &[f64], count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(StatsError::InvalidInput(
            "number of bins must be positive".to_string(),
        ));
    }

    let (mut first, mut last) = min_max(data)
        .ok_or_else(|| StatsError::InvalidInput("cannot bin an empty dataset".to_string()))?;

    if first == last {
        first -= 0.5;
        last += 0.5;
    }

    Ok(linspace(first, last, count + 1))
}

/// Counts how many values of `data` fall into each bin described by `edges`.
///
/// Returns `edges.len() - 1` counts.
pub fn histogram(data: &[f64], edges: &[f64]) -> Vec<u64> {
    let bin_count = edges.len().saturating_sub(1);
    let mut counts = vec![0u64; bin_count];
    if bin_count == 0 {
        return counts;
    }

    let first = edges[0];
    let last = edges[bin_count];
    for &value in data {
        if !(value >= first && value <= last) {
            continue;
        }

        // Number of edges <= value; the last edge closes the final bin.
        let index = edges.partition_point(|&edge| edge <= value);
        let bin = index.saturating_sub(1).min(bin_count - 1);
        counts[bin] += 1;
    }

    counts
}

/// Returns the smallest and largest value of `data`, or [`None`] if it is empty.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let mut values = data.iter().copied();
    let first = values.next()?;
    Some(values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    }))
}

fn validate_edges(edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(StatsError::InvalidInput(format!(
            "at least 2 bin edges are required, got {}",
            edges.len()
        )));
    }

    if edges.iter().any(|edge| !edge.is_finite()) {
        return Err(StatsError::InvalidInput(
            "bin edges must be finite".to_string(),
        ));
    }

    if edges.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(StatsError::InvalidInput(
            "bin edges must increase monotonically".to_string(),
        ));
    }

    Ok(())
}
