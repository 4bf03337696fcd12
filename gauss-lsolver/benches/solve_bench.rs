//! Benchmarks for the dense Gaussian elimination backends.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gauss_lsolver::algorithms::{
    GaussianElimination, NaiveGaussianElimination, ParallelGaussianElimination, SolveAlgorithm,
};
use gauss_lsolver::Instance;

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_solve");
    group.sample_size(10);

    let naive = NaiveGaussianElimination::default();
    let flat = GaussianElimination::default();
    let parallel = ParallelGaussianElimination::new(4).expect("thread pool");

    for size in [50, 100, 200, 400] {
        let instance = Instance::seeded(size, 2024).expect("instance");

        group.bench_with_input(BenchmarkId::new("naive", size), &instance, |b, inst| {
            b.iter(|| black_box(naive.solve(&inst.a, &inst.b).expect("solve").x))
        });
        group.bench_with_input(BenchmarkId::new("flat", size), &instance, |b, inst| {
            b.iter(|| black_box(flat.solve(&inst.a, &inst.b).expect("solve").x))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &instance, |b, inst| {
            b.iter(|| black_box(parallel.solve(&inst.a, &inst.b).expect("solve").x))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
