use crate::utilities::math::logspace;

/// Number of species in the synthetic community used by the study.
pub const DEFAULT_SPECIES: usize = 10_000;

/// Power-law shape parameter used by the study.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Parameters of a synthetic sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Number of species (`S`) in the synthetic community.
    pub species: usize,
    /// Shape parameter of the power law the abundances are drawn from.
    pub alpha: f64,
    /// Sampling fractions `p`; a sub-sample of `floor(N * p)` individuals is drawn for each.
    pub fractions: Vec<f64>,
    /// Seed for the random number generator. A random seed is picked when [`None`].
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            species: DEFAULT_SPECIES,
            alpha: DEFAULT_ALPHA,
            fractions: default_fractions(),
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Returns this configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Sampling fractions `1e-7, 1e-6, ..., 1e-1`.
pub fn default_fractions() -> Vec<f64> {
    logspace(-7.0, -1.0, 7)
}
