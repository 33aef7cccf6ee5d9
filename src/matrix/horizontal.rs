use super::Matrix;

/// Horizontal multiplication against a pre-transposed B: C += A * B
///
/// `bt` holds B^T, so column j of B is row j of `bt`. The inner loop then
/// walks a row of A and a row of `bt` side by side, both with stride 1.
/// Same result as [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk)
/// on the untransposed B.
///
/// This does not transpose anything itself. Passing a B that has not been
/// transposed computes A * B^T instead.
///
/// # Panics
///
/// Panics if the three matrices are not the same size.
pub fn matmul_horizontal(a: &Matrix, bt: &Matrix, c: &mut Matrix) {
    let n = a.size();
    assert_eq!(bt.size(), n, "B^T: expected {}x{}", n, n);
    assert_eq!(c.size(), n, "C: expected {}x{}", n, n);

    let c = c.as_mut_slice();
    for i in 0..n {
        let a_row = a.row(i);
        for j in 0..n {
            let bt_row = bt.row(j);
            for p in 0..n {
                // same as the naive kernel, but across a row of B^T
                let prod = a_row[p].wrapping_mul(bt_row[p]);
                c[i * n + j] = c[i * n + j].wrapping_add(prod);
            }
        }
    }
}
