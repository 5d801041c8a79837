use core::num::NonZeroUsize;
use once_cell::sync::Lazy;

static NUM_CORES: Lazy<NonZeroUsize> = Lazy::new(detect_num_cores);

#[cfg(feature = "detect_num_cores")]
fn detect_num_cores() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get_physical()).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(not(feature = "detect_num_cores"))]
fn detect_num_cores() -> NonZeroUsize {
    NonZeroUsize::MIN
}

/// Retrieves the number of cores that the system has.
/// This sizes the thread pool used to sample fractions in parallel.
pub fn get_num_cores() -> NonZeroUsize {
    *NUM_CORES
}
