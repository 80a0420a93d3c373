//! Benchmarks for matrix product, determinant and inverse.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matriz::prelude::*;

// Diagonally dominant so every size is invertible
fn test_matrix(n: usize) -> Matrix {
    let data = (0..n * n)
        .map(|k| {
            let (i, j) = (k / n, k % n);
            if i == j {
                n as f64 + 1.0
            } else {
                ((i * 7 + j * 3) % 5) as f64 * 0.1
            }
        })
        .collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_mul_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_matrix");

    for size in [4, 16, 64].iter() {
        let a = test_matrix(*size);
        let b = test_matrix(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b));
        });
    }

    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    // Laplace expansion is O(n!), keep sizes small
    for size in [3, 5, 7, 8].iter() {
        let a = test_matrix(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&a).determinant().unwrap());
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_matrix");

    for size in [2, 3, 5, 6].iter() {
        let a = test_matrix(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&a).inverse_matrix().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul_matrix, bench_determinant, bench_inverse);
criterion_main!(benches);
