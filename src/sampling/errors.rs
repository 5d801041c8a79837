use thiserror::Error;

/// Errors that can occur while generating or sub-sampling a synthetic community.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The inverse transform produced a value that is not a valid abundance.
    /// This happens for a negative base raised to a non-integer power, or at the
    /// singular point `u == alpha`.
    #[error("Invalid abundance {value} for species {species}")]
    InvalidAbundance { species: usize, value: f64 },

    #[error("Community size overflows a 64-bit integer")]
    CommunityTooLarge,

    #[error("Failed to build the sampling thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub(crate) type Result<T> = core::result::Result<T, SamplingError>;
