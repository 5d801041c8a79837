// Available modules
mod log_histogram;
mod subsample;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use log_histogram::bench_log_histogram;
#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};
use subsample::bench_subsample;

fn criterion_benchmark(c: &mut Criterion) {
    bench_subsample(c);
    bench_log_histogram(c);
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
