//! # richness-stats
//! Synthetic species-abundance sampling and statistical utilities for studying how
//! species richness scales with sampling effort.
//!
//! - [`sampling`] draws a power-law community and sub-samples it without replacement.
//! - [`statistics`] holds the histogram, power-law, mode and p-value estimators.
//! - [`geography`] classifies sampling stations by latitude.

/// Synthetic community generation and sampling without replacement.
pub mod sampling {
    /// Power-law abundances via inverse transform sampling.
    pub mod abundances;
    pub mod config;
    pub mod errors;
    pub mod runner;

    /// Per-fraction results and their compressed JSON representation.
    pub mod sample_set;
    pub mod subsample;
    pub mod weight_tree;

    pub use abundances::{generate_abundances, Community};
    pub use config::SamplerConfig;
    pub use errors::SamplingError;
    pub use runner::{run, run_quiet};
    pub use sample_set::{FractionSample, SampleSet, SampleSetError};
    pub use subsample::{subsample, subsample_size};
}

/// Stateless statistical estimators over in-memory data.
pub mod statistics {
    pub mod binned_mode;
    pub mod errors;
    pub mod histogram;
    pub mod log_histogram;
    pub mod power_law;
    pub mod pvalue;

    pub use binned_mode::mode_with_binning;
    pub use errors::StatsError;
    pub use histogram::Bins;
    pub use log_histogram::{log_hist, LogHistogram};
    pub use power_law::{maximum_likelihood_exponent, PowerLawFit};
    pub use pvalue::{two_tailed_pvalue, two_tailed_pvalues, NormalReference};
}

/// Geographic helpers for sampling stations.
pub mod geography {
    pub mod region;

    pub use region::{classify_latitude, InvalidLatitude, Region};
}

pub mod utilities {
    /// Kolmogorov–Smirnov goodness-of-fit testing.
    pub mod kolmogorov;
    pub mod math;
    pub mod system_info;
}
