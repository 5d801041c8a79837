use criterion::{black_box, Criterion};
use richness_stats::statistics::log_histogram::{log_hist, DEFAULT_LOG_BINS};

pub fn bench_log_histogram(c: &mut Criterion) {
    let counts = [1000, 100_000];

    for &count in &counts {
        let data: Vec<f64> = (1..=count)
            .map(|i| (count as f64 / i as f64).powf(1.5))
            .collect();

        let id = &format!("log_hist_{}", count);
        c.bench_function(id, |b| {
            b.iter(|| log_hist(black_box(&data), DEFAULT_LOG_BINS).unwrap())
        });
    }
}
