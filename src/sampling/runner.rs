//! End-to-end synthetic sampling: generate a community, then sub-sample it at every fraction.
//!
//! Fractions are independent of each other and are processed in parallel. Each fraction
//! owns its own copy of the weights and its own random stream, so results only depend on
//! the seed and never on thread scheduling.

use super::abundances::{generate_abundances, Community};
use super::config::SamplerConfig;
use super::errors::Result;
use super::sample_set::{FractionSample, SampleSet};
use super::subsample::{subsample_draws, subsample_size};
use crate::utilities::system_info::get_num_cores;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Random stream used to generate the community; fraction `i` uses stream `i + 1`.
const COMMUNITY_STREAM: u64 = 0;

/// Creates the random generator for a given `stream` of a run seeded with `seed`.
pub fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:>10} [{bar:40}] {pos}/{len} ({eta})")
        .map(|style| style.progress_chars("=> "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Runs the sampler without drawing any progress bars.
pub fn run_quiet(config: &SamplerConfig) -> Result<SampleSet> {
    run(
        config,
        &MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
    )
}

/// Generates a synthetic community and sub-samples it without replacement at each of the
/// configured fractions.
///
/// Every fraction is validated before any sampling starts; on error no output is produced.
///
/// # Arguments
/// * `config` - Community and sampling parameters.
/// * `progress` - Container receiving one progress bar per fraction.
///
/// # Returns
/// The [`SampleSet`] holding the occurrence counts of every fraction, in configuration order.
pub fn run(config: &SamplerConfig, progress: &MultiProgress) -> Result<SampleSet> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let mut rng = stream_rng(seed, COMMUNITY_STREAM);
    let community = generate_abundances(&mut rng, config.species, config.alpha)?;

    let sizes = config
        .fractions
        .iter()
        .map(|&fraction| subsample_size(community.total, fraction))
        .collect::<Result<Vec<u64>>>()?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(get_num_cores().get())
        .build()?;

    // Each result lands in the slot of its fraction.
    let samples = pool.install(|| {
        config
            .fractions
            .par_iter()
            .zip(sizes.par_iter())
            .enumerate()
            .map(|(index, (&fraction, &size))| {
                sample_fraction(&community, seed, index, fraction, size, progress)
            })
            .collect::<Result<Vec<FractionSample>>>()
    })?;

    Ok(SampleSet {
        species: config.species,
        alpha: config.alpha,
        community_size: community.total,
        seed,
        samples,
    })
}

fn sample_fraction(
    community: &Community,
    seed: u64,
    index: usize,
    fraction: f64,
    size: u64,
    progress: &MultiProgress,
) -> Result<FractionSample> {
    let bar = progress.add(
        ProgressBar::new(size)
            .with_style(progress_style())
            .with_message(format!("p = {:.0e}", fraction)),
    );

    let mut rng = stream_rng(seed, COMMUNITY_STREAM + 1 + index as u64);
    let occurrence_counts = subsample_draws(community, size, &mut rng, &bar)?;

    Ok(FractionSample {
        fraction,
        subsample_size: size,
        occurrence_counts,
    })
}
