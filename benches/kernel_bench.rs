//! Benchmarks for kernel evaluation over large grids

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use sparse_deconv::{DirichletKernel, GaussianKernel, Kernel};

/// Generate an evaluation grid covering a few periods
fn generate_grid(size: usize) -> Array1<f64> {
    Array1::linspace(-20.0, 20.0, size)
}

fn bench_dirichlet(c: &mut Criterion) {
    let mut group = c.benchmark_group("dirichlet");
    let kernel = DirichletKernel::<f64>::new(16).unwrap();

    for &size in &[1_000, 100_000, 1_000_000] {
        let grid = generate_grid(size);
        group.bench_with_input(BenchmarkId::new("evaluate", size), &grid, |b, grid| {
            b.iter(|| black_box(kernel.evaluate(grid)))
        });
        group.bench_with_input(BenchmarkId::new("derivative", size), &grid, |b, grid| {
            b.iter(|| black_box(kernel.derivative(grid)))
        });
    }

    group.finish();
}

fn bench_gaussian(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian");
    let kernel = GaussianKernel::<f64>::new(0.5).unwrap();

    for &size in &[1_000, 100_000, 1_000_000] {
        let grid = generate_grid(size);
        group.bench_with_input(BenchmarkId::new("evaluate", size), &grid, |b, grid| {
            b.iter(|| black_box(kernel.evaluate(grid)))
        });
        group.bench_with_input(BenchmarkId::new("pointwise", size), &grid, |b, grid| {
            b.iter(|| black_box(grid.iter().map(|&x| kernel.evaluate_at(x)).sum::<f64>()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dirichlet, bench_gaussian);
criterion_main!(benches);
