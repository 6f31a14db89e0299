//! Covariance kernel benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Per-pair operations (evaluate, gradients, Hessian)
//! - Dimensionality scaling (1D, 5D, 20D)
//! - Variant comparison (square exponential vs Matérn 5/2)
//! - Caller-side covariance matrix assembly
//! - Registry construction overhead
//!
//! Run with: `cargo bench`

use covkernel_rs::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

/// Point pairs evaluated per iteration of the per-pair benchmarks.
const PAIRS: usize = 1_000;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate standard-normal points.
fn generate_points(dim: usize, count: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coord_dist = Normal::new(0.0, 1.0).unwrap();

    (0..count)
        .map(|_| (0..dim).map(|_| coord_dist.sample(&mut rng)).collect())
        .collect()
}

/// Generate point pairs for per-pair operation benchmarks.
fn generate_pairs(dim: usize, count: usize, seed: u64) -> Vec<(Vec<f64>, Vec<f64>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coord_dist = Normal::new(0.0, 1.0).unwrap();

    (0..count)
        .map(|_| {
            let a = (0..dim).map(|_| coord_dist.sample(&mut rng)).collect();
            let b = (0..dim).map(|_| coord_dist.sample(&mut rng)).collect();
            (a, b)
        })
        .collect()
}

/// Generate a valid hyperparameter vector with assorted length scales.
fn generate_hyperparameters(dim: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let scale_dist = Uniform::new(0.3, 2.5).unwrap();

    let mut hp = Vec::with_capacity(dim + 1);
    hp.push(1.5); // signal variance
    for _ in 0..dim {
        hp.push(scale_dist.sample(&mut rng));
    }
    hp
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for dim in [1, 5, 20] {
        group.throughput(Throughput::Elements(PAIRS as u64));

        let hp = generate_hyperparameters(dim, 42);
        let pairs = generate_pairs(dim, PAIRS, 7);

        let kernel = SquareExponentialKernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("square_exponential", dim), &dim, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for (a, b) in &pairs {
                    acc += kernel.evaluate(black_box(a), black_box(b)).unwrap();
                }
                acc
            })
        });

        let kernel = Matern52Kernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("matern_5_2", dim), &dim, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for (a, b) in &pairs {
                    acc += kernel.evaluate(black_box(a), black_box(b)).unwrap();
                }
                acc
            })
        });
    }

    group.finish();
}

fn bench_spatial_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_gradient");

    for dim in [1, 5, 20] {
        group.throughput(Throughput::Elements(PAIRS as u64));

        let hp = generate_hyperparameters(dim, 42);
        let pairs = generate_pairs(dim, PAIRS, 7);

        let kernel = SquareExponentialKernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("square_exponential", dim), &dim, |b, _| {
            b.iter(|| {
                for (a, b) in &pairs {
                    black_box(kernel.spatial_gradient(black_box(a), black_box(b)).unwrap());
                }
            })
        });

        let kernel = Matern52Kernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("matern_5_2", dim), &dim, |b, _| {
            b.iter(|| {
                for (a, b) in &pairs {
                    black_box(kernel.spatial_gradient(black_box(a), black_box(b)).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_hyperparameter_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyperparameter_gradient");

    for dim in [1, 5, 20] {
        group.throughput(Throughput::Elements(PAIRS as u64));

        let hp = generate_hyperparameters(dim, 42);
        let pairs = generate_pairs(dim, PAIRS, 7);

        let kernel = SquareExponentialKernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("square_exponential", dim), &dim, |b, _| {
            b.iter(|| {
                for (a, b) in &pairs {
                    black_box(
                        kernel
                            .hyperparameter_gradient(black_box(a), black_box(b))
                            .unwrap(),
                    );
                }
            })
        });

        let kernel = Matern52Kernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("matern_5_2", dim), &dim, |b, _| {
            b.iter(|| {
                for (a, b) in &pairs {
                    black_box(
                        kernel
                            .hyperparameter_gradient(black_box(a), black_box(b))
                            .unwrap(),
                    );
                }
            })
        });
    }

    group.finish();
}

fn bench_hyperparameter_hessian(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyperparameter_hessian");
    group.sample_size(50);

    // Quadratic in dim, so only the square exponential qualifies.
    for dim in [1, 5, 20] {
        group.throughput(Throughput::Elements(PAIRS as u64));

        let hp = generate_hyperparameters(dim, 42);
        let pairs = generate_pairs(dim, PAIRS, 7);

        let kernel = SquareExponentialKernel::new(&hp).unwrap();
        group.bench_with_input(BenchmarkId::new("square_exponential", dim), &dim, |b, _| {
            b.iter(|| {
                for (a, b) in &pairs {
                    black_box(
                        kernel
                            .hyperparameter_hessian(black_box(a), black_box(b))
                            .unwrap(),
                    );
                }
            })
        });
    }

    group.finish();
}

fn bench_matrix_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_assembly");
    group.sample_size(50);

    // The embarrassingly parallel workload shape: n^2 independent pairs.
    for n in [50_usize, 100] {
        group.throughput(Throughput::Elements((n * n) as u64));

        let points = generate_points(3, n, 42);
        let kernel = SquareExponentialKernel::new(&generate_hyperparameters(3, 11)).unwrap();

        group.bench_with_input(BenchmarkId::new("square_exponential", n), &n, |b, _| {
            b.iter(|| {
                let mut matrix = vec![0.0_f64; n * n];
                for i in 0..n {
                    for j in 0..=i {
                        let value = kernel
                            .evaluate(black_box(&points[i]), black_box(&points[j]))
                            .unwrap();
                        matrix[i * n + j] = value;
                        matrix[j * n + i] = value;
                    }
                }
                matrix
            })
        });
    }

    group.finish();
}

fn bench_registry_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let registry = KernelRegistry::<f64>::with_defaults();
    let hp = generate_hyperparameters(5, 42);

    for tag in ["square_exponential", "matern_5_2"] {
        group.bench_with_input(BenchmarkId::new("create", tag), &tag, |b, _| {
            b.iter(|| registry.create(black_box(tag), black_box(&hp)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_spatial_gradient,
    bench_hyperparameter_gradient,
    bench_hyperparameter_hessian,
    bench_matrix_assembly,
    bench_registry_dispatch,
);

criterion_main!(benches);
