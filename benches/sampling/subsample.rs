use criterion::{black_box, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use richness_stats::sampling::{generate_abundances, subsample};

pub fn bench_subsample(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let community = generate_abundances(&mut rng, 10_000, 0.5).unwrap();
    println!(
        "[subsample] Community: {} species, {} individuals",
        community.species(),
        community.total
    );

    let fractions = [1e-5, 1e-4, 1e-3];
    for &fraction in &fractions {
        let id = &format!("subsample_{:.0e}", fraction);
        c.bench_function(id, |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| subsample(black_box(&community), fraction, &mut rng).unwrap())
        });
    }
}
