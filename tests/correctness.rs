use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilebench::blocked::tiled::matmul_tiled;
use tilebench::matrix::horizontal::matmul_horizontal;
use tilebench::matrix::naive_ijk::matmul_naive_ijk;
use tilebench::matrix::transpose::transpose_in_place;
use tilebench::matrix::{Matrix, VALUE_RANGE};
use tilebench::{BenchConfig, BenchError, BenchmarkRunner, verify};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    if let Err(mismatch) = verify(expected, actual) {
        panic!("{}: {}", name, mismatch);
    }
}

/// Direct definition: C[r][c] = sum_k A[r][k] * B[k][c]
fn reference_product(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.size();
    let mut c = Matrix::zeros(n);
    for r in 0..n {
        for col in 0..n {
            c[(r, col)] = (0..n).map(|k| a[(r, k)] * b[(k, col)]).sum();
        }
    }
    c
}

fn naive(a: &Matrix, b: &Matrix) -> Matrix {
    let mut c = Matrix::zeros(a.size());
    matmul_naive_ijk(a, b, &mut c);
    c
}

fn transposed(b: &Matrix) -> Matrix {
    let mut bt = b.clone();
    transpose_in_place(&mut bt);
    bt
}

// ============================================================
// Fixed scenarios
// ============================================================

#[test]
fn test_2x2_all_kernels() {
    let a = Matrix::from_rows(&[[1, 2], [3, 4]]);
    let b = Matrix::from_rows(&[[5, 6], [7, 8]]);
    let expected = Matrix::from_rows(&[[19, 22], [43, 50]]);

    assert_matrices_equal(&expected, &naive(&a, &b), "naive");

    let bt = transposed(&b);
    let mut c = Matrix::zeros(2);
    matmul_horizontal(&a, &bt, &mut c);
    assert_matrices_equal(&expected, &c, "horizontal");

    for tile in [1, 2] {
        let mut c = Matrix::zeros(2);
        matmul_tiled(&a, &bt, &mut c, tile).unwrap();
        assert_matrices_equal(&expected, &c, &format!("tiled_{}", tile));
    }
}

#[test]
fn test_4x4_identity() {
    let a = Matrix::from_rows(&[[1, 2, 3, 4], [0, 1, 0, 1], [2, 0, 1, 0], [1, 1, 1, 1]]);
    let b = Matrix::identity(4);

    assert_matrices_equal(&a, &naive(&a, &b), "naive");

    let bt = transposed(&b);
    let mut c = Matrix::zeros(4);
    matmul_horizontal(&a, &bt, &mut c);
    assert_matrices_equal(&a, &c, "horizontal");

    for tile in [1, 2, 4] {
        let mut c = Matrix::zeros(4);
        matmul_tiled(&a, &bt, &mut c, tile).unwrap();
        assert_matrices_equal(&a, &c, &format!("tiled_{}", tile));
    }
}

// ============================================================
// Random matrices, every tile size
// ============================================================

#[test]
fn test_random_all_tile_sizes() {
    let mut rng = StdRng::seed_from_u64(2024);
    for size in [16, 48, 64] {
        let a = Matrix::random(size, &mut rng);
        let b = Matrix::random(size, &mut rng);
        let expected = reference_product(&a, &b);

        assert_matrices_equal(&expected, &naive(&a, &b), &format!("naive_{}", size));

        let bt = transposed(&b);
        let mut c = Matrix::zeros(size);
        matmul_horizontal(&a, &bt, &mut c);
        assert_matrices_equal(&expected, &c, &format!("horizontal_{}", size));

        for tile in (1..=size).filter(|t| size % t == 0) {
            let mut c = Matrix::zeros(size);
            matmul_tiled(&a, &bt, &mut c, tile).unwrap();
            assert_matrices_equal(&expected, &c, &format!("tiled_{}_tile_{}", size, tile));
        }
    }
}

#[test]
fn test_tile_not_dividing_size_is_rejected() {
    let a = Matrix::identity(10);
    let bt = Matrix::identity(10);

    for tile in [0, 3, 4, 7, 20] {
        let mut c = Matrix::zeros(10);
        assert_eq!(
            matmul_tiled(&a, &bt, &mut c, tile),
            Err(BenchError::TileSize { tile, size: 10 })
        );
        assert_eq!(c, Matrix::zeros(10), "tile {} must not write C", tile);
    }
}

// ============================================================
// Accumulation (C += A*B, not C = A*B)
// ============================================================

#[test]
fn test_kernels_accumulate() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = Matrix::random(8, &mut rng);
    let b = Matrix::random(8, &mut rng);
    let bt = transposed(&b);
    let once = naive(&a, &b);

    let mut twice = Matrix::zeros(8);
    matmul_tiled(&a, &bt, &mut twice, 4).unwrap();
    matmul_tiled(&a, &bt, &mut twice, 4).unwrap();

    for (x, y) in once.as_slice().iter().zip(twice.as_slice()) {
        assert_eq!(2 * x, *y);
    }
}

// ============================================================
// Full runner
// ============================================================

#[test]
fn test_runner_multiple_trials_match_single_trial() {
    let config = |trials| BenchConfig::new(trials, 3).with_size(32).with_seed(11);

    let mut single = BenchmarkRunner::new(config(1)).unwrap();
    let single_summary = single.run().unwrap();
    let mut multi = BenchmarkRunner::new(config(4)).unwrap();
    let multi_summary = multi.run().unwrap();

    assert_eq!(single_summary.mismatches, 0);
    assert_eq!(multi_summary.mismatches, 0);
    assert_eq!(multi_summary.trials, 4);

    let expected = reference_product(single.a(), single.b());
    assert_matrices_equal(&expected, multi.naive_result(), "runner naive");
    assert_matrices_equal(&expected, multi.horizontal_result(), "runner horizontal");
    assert_matrices_equal(&expected, multi.tiled_result(), "runner tiled");
}

#[test]
fn test_runner_averages_are_per_trial() {
    let mut runner = BenchmarkRunner::new(BenchConfig::new(3, 2).with_size(16).with_seed(3)).unwrap();
    let mut naive_total = 0.0;
    let mut tile_totals = [0.0; 3];
    let summary = runner
        .run_with(|s| match s.kernel {
            tilebench::Kernel::Naive => naive_total += s.elapsed.as_secs_f64(),
            tilebench::Kernel::Tiled(tile) => {
                tile_totals[tile.trailing_zeros() as usize] += s.elapsed.as_secs_f64()
            }
            tilebench::Kernel::Horizontal => {}
        })
        .unwrap();

    assert!((summary.naive - naive_total / 3.0).abs() < 1e-12);
    for (i, &(tile, avg)) in summary.tiled.iter().enumerate() {
        assert_eq!(tile, 1 << i);
        assert!((avg - tile_totals[i] / 3.0).abs() < 1e-12);
    }
}

// ============================================================
// Properties
// ============================================================

fn square(n: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(0..VALUE_RANGE, n * n)
        .prop_map(move |data| Matrix::from_vec(n, data).unwrap())
}

fn operands() -> impl Strategy<Value = (Matrix, Matrix)> {
    prop::sample::select(vec![1usize, 2, 4, 6, 8, 12])
        .prop_flat_map(|n| (square(n), square(n)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_naive_matches_definition((a, b) in operands()) {
        prop_assert_eq!(naive(&a, &b), reference_product(&a, &b));
    }

    #[test]
    fn prop_horizontal_matches_naive((a, b) in operands()) {
        let bt = transposed(&b);
        let mut c = Matrix::zeros(a.size());
        matmul_horizontal(&a, &bt, &mut c);
        prop_assert_eq!(c, naive(&a, &b));
    }

    #[test]
    fn prop_tiled_matches_naive_for_every_divisor((a, b) in operands()) {
        let n = a.size();
        let bt = transposed(&b);
        let expected = naive(&a, &b);
        for tile in (1..=n).filter(|t| n % t == 0) {
            let mut c = Matrix::zeros(n);
            matmul_tiled(&a, &bt, &mut c, tile).unwrap();
            prop_assert_eq!(&c, &expected, "tile {}", tile);
        }
    }

    #[test]
    fn prop_transpose_is_involution(b in prop::sample::select(vec![0usize, 1, 3, 8, 13]).prop_flat_map(square)) {
        let mut twice = b.clone();
        transpose_in_place(&mut twice);
        transpose_in_place(&mut twice);
        prop_assert_eq!(twice, b);
    }
}
