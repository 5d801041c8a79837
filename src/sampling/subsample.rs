//! Sampling of individuals without replacement from a synthetic community.
//!
//! Every draw picks a species with probability proportional to the number of its
//! individuals still left in the community, then removes one individual of that species.

use super::abundances::Community;
use super::errors::{Result, SamplingError};
use super::weight_tree::WeightTree;
use indicatif::ProgressBar;
use rand::Rng;

/// Number of draws between progress bar updates.
const PROGRESS_STRIDE: u64 = 4096;

/// Computes the sub-sample size `floor(total * fraction)`.
///
/// # Errors
/// [`SamplingError::InvalidParameter`] if `fraction` is not within `[0, 1]`, or the
/// resulting size exceeds `total`.
pub fn subsample_size(total: u64, fraction: f64) -> Result<u64> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(SamplingError::InvalidParameter(format!(
            "sampling fraction must be within [0, 1], got {}",
            fraction
        )));
    }

    let size = (total as f64 * fraction).floor() as u64;
    if size > total {
        return Err(SamplingError::InvalidParameter(format!(
            "sub-sample of {} individuals exceeds community size {}",
            size, total
        )));
    }

    Ok(size)
}

/// Draws `floor(N * fraction)` individuals without replacement and returns how many times
/// each observed species was drawn.
///
/// # Returns
/// The occurrence counts of every species drawn at least once, ordered by species index.
/// The counts always sum to the sub-sample size.
pub fn subsample<R: Rng + ?Sized>(
    community: &Community,
    fraction: f64,
    rng: &mut R,
) -> Result<Vec<u64>> {
    let draws = subsample_size(community.total, fraction)?;
    subsample_draws(community, draws, rng, &ProgressBar::hidden())
}

/// Draws exactly `draws` individuals without replacement, reporting progress to `progress`.
///
/// # Errors
/// [`SamplingError::InvalidParameter`] if `draws` exceeds the community size.
pub fn subsample_draws<R: Rng + ?Sized>(
    community: &Community,
    draws: u64,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<Vec<u64>> {
    if draws > community.total {
        return Err(SamplingError::InvalidParameter(format!(
            "cannot draw {} individuals from a community of {}",
            draws, community.total
        )));
    }

    // Private copy of the weights; the community itself is never mutated.
    let mut weights = WeightTree::new(&community.abundances);
    let mut drawn = vec![0u64; community.species()];

    progress.set_length(draws);
    let mut remaining = draws;
    while remaining > 0 {
        let batch = remaining.min(PROGRESS_STRIDE);
        for _ in 0..batch {
            let species = draw_one(&mut weights, rng)?;
            drawn[species] += 1;
        }

        remaining -= batch;
        progress.inc(batch);
    }
    progress.finish();

    Ok(drawn.into_iter().filter(|&count| count > 0).collect())
}

/// Draws a single individual, removing it from `weights`. Returns its species index.
fn draw_one<R: Rng + ?Sized>(weights: &mut WeightTree, rng: &mut R) -> Result<usize> {
    if weights.total() == 0 {
        return Err(SamplingError::InvalidParameter(
            "no individuals left to draw".to_string(),
        ));
    }

    let target = rng.gen_range(0..weights.total());
    let species = weights.find(target).ok_or_else(|| {
        SamplingError::InvalidParameter(format!(
            "draw target {} outside remaining weight {}",
            target,
            weights.total()
        ))
    })?;

    weights.decrement(species);
    Ok(species)
}
