//! Criterion comparison of the three kernels.
//!
//! ```bash
//! cargo bench --bench matmul_bench
//! cargo bench --bench matmul_bench -- tiled
//! ```

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilebench::blocked::tiled::matmul_tiled;
use tilebench::matrix::Matrix;
use tilebench::matrix::horizontal::matmul_horizontal;
use tilebench::matrix::naive_ijk::matmul_naive_ijk;
use tilebench::matrix::transpose::transpose_in_place;

const SIZES: [usize; 2] = [128, 256];

fn operands(size: usize) -> (Matrix, Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Matrix::random(size, &mut rng);
    let b = Matrix::random(size, &mut rng);
    let mut bt = b.clone();
    transpose_in_place(&mut bt);
    (a, b, bt)
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    group.sample_size(10);

    for size in SIZES {
        let (a, b, bt) = operands(size);
        let mut out = Matrix::zeros(size);

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| {
                out.clear();
                matmul_naive_ijk(black_box(&a), black_box(&b), &mut out);
                black_box(&out);
            });
        });

        group.bench_with_input(BenchmarkId::new("horizontal", size), &size, |bench, _| {
            bench.iter(|| {
                out.clear();
                matmul_horizontal(black_box(&a), black_box(&bt), &mut out);
                black_box(&out);
            });
        });
    }

    group.finish();
}

fn bench_tiled(c: &mut Criterion) {
    let size = 256;
    let mut group = c.benchmark_group(format!("tiled_{}", size));
    group.sample_size(10);

    let (a, _, bt) = operands(size);
    let mut out = Matrix::zeros(size);

    for power in 0..=6 {
        let tile = 1usize << power;
        group.bench_with_input(BenchmarkId::from_parameter(tile), &tile, |bench, &tile| {
            bench.iter(|| {
                out.clear();
                matmul_tiled(black_box(&a), black_box(&bt), &mut out, tile)
                    .expect("tile divides size");
                black_box(&out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_tiled);
criterion_main!(benches);
