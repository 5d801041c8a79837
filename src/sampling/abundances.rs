//! Generation of synthetic species abundances by inverse transform sampling.

use super::errors::{Result, SamplingError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of values representable as `u64` when converting from `f64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A synthetic community: the number of individuals of each species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    /// Abundance of each species, indexed by species.
    pub abundances: Vec<u64>,
    /// Total number of individuals (`N`), the sum of all abundances.
    pub total: u64,
}

impl Community {
    /// Creates a community from explicit abundances.
    ///
    /// # Errors
    /// [`SamplingError::CommunityTooLarge`] if the total overflows a `u64`.
    pub fn from_abundances(abundances: Vec<u64>) -> Result<Self> {
        let total = abundances
            .iter()
            .try_fold(0u64, |sum, &abundance| sum.checked_add(abundance))
            .ok_or(SamplingError::CommunityTooLarge)?;

        Ok(Self { abundances, total })
    }

    /// Number of species in the community.
    pub fn species(&self) -> usize {
        self.abundances.len()
    }
}

/// Inverse CDF of the power law used to generate abundances:
/// `(1 - u / alpha)^(-1 / alpha)`.
pub fn inverse_power_law(u: f64, alpha: f64) -> f64 {
    (1.0 - u / alpha).powf(-1.0 / alpha)
}

/// Draws a synthetic community of `species` abundances from a power law with shape `alpha`.
///
/// Each abundance is `floor((1 - u/alpha)^(-1/alpha))` with `u` uniform in `(0, 1]`.
///
/// # Arguments
/// * `rng` - Source of randomness.
/// * `species` - Number of species (`S`). Must be positive.
/// * `alpha` - Shape parameter of the power law. Must be finite and strictly positive.
///
/// # Errors
/// * [`SamplingError::InvalidParameter`] - If `species == 0` or `alpha` is invalid.
/// * [`SamplingError::InvalidAbundance`] - If a transformed value is not a finite,
///   non-negative number representable as `u64`.
/// * [`SamplingError::CommunityTooLarge`] - If the total number of individuals overflows.
pub fn generate_abundances<R: Rng + ?Sized>(
    rng: &mut R,
    species: usize,
    alpha: f64,
) -> Result<Community> {
    if species == 0 {
        return Err(SamplingError::InvalidParameter(
            "species count must be positive".to_string(),
        ));
    }

    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(SamplingError::InvalidParameter(format!(
            "alpha must be finite and strictly positive, got {}",
            alpha
        )));
    }

    let mut abundances = Vec::with_capacity(species);
    for index in 0..species {
        // gen::<f64>() is in [0, 1), so u is in (0, 1].
        let u = 1.0 - rng.gen::<f64>();
        let value = inverse_power_law(u, alpha).floor();

        if !(value >= 0.0 && value < U64_LIMIT) {
            return Err(SamplingError::InvalidAbundance {
                species: index,
                value,
            });
        }

        abundances.push(value as u64);
    }

    Community::from_abundances(abundances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    #[test]
    fn abundances_are_at_least_one_for_default_alpha() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let community = generate_abundances(&mut rng, 1000, 0.5).unwrap();

        assert_eq!(community.species(), 1000);
        assert!(community.abundances.iter().all(|&x| x >= 1));
        assert_eq!(community.total, community.abundances.iter().sum::<u64>());
    }

    #[test]
    fn same_seed_same_community() {
        let a = generate_abundances(&mut ChaCha8Rng::seed_from_u64(7), 500, 0.5).unwrap();
        let b = generate_abundances(&mut ChaCha8Rng::seed_from_u64(7), 500, 0.5).unwrap();
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(1.0, 1.0, 0.0)] // singular point, base is zero
    #[case(0.25, 0.5, 4.0)]
    #[case(0.75, 0.5, 4.0)] // negative base, even integer power
    #[case(0.5, 1.0, 2.0)]
    fn inverse_transform_values(#[case] u: f64, #[case] alpha: f64, #[case] expected: f64) {
        let value = inverse_power_law(u, alpha);
        if expected == 0.0 {
            assert!(value.is_infinite());
        } else {
            assert!((value - expected).abs() < 1e-12, "value = {}", value);
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn invalid_alpha_is_rejected(#[case] alpha: f64) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            generate_abundances(&mut rng, 10, alpha),
            Err(SamplingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_species_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            generate_abundances(&mut rng, 0, 0.5),
            Err(SamplingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn non_integer_power_of_negative_base_is_rejected() {
        // alpha = 0.3 gives a negative base for any u > 0.3, raised to -1/0.3.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            generate_abundances(&mut rng, 1000, 0.3),
            Err(SamplingError::InvalidAbundance { .. })
        ));
    }

    #[test]
    fn overflowing_community_is_rejected() {
        assert!(matches!(
            Community::from_abundances(vec![u64::MAX, 1]),
            Err(SamplingError::CommunityTooLarge)
        ));
    }
}
