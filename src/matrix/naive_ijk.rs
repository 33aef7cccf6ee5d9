use super::Matrix;

/// Naive matrix multiplication using i-j-k loop order: C += A * B
///
/// This is the textbook triple loop. The innermost loop walks B with
/// stride `n` (down a column), so every step lands on a different cache
/// line. It is the correctness baseline every other kernel is checked
/// against.
///
/// Arithmetic wraps on overflow, like fixed-width unsigned integers.
///
/// # Panics
///
/// Panics if the three matrices are not the same size.
pub fn matmul_naive_ijk(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    let n = a.size();
    assert_eq!(b.size(), n, "B: expected {}x{}", n, n);
    assert_eq!(c.size(), n, "C: expected {}x{}", n, n);

    let (a, b) = (a.as_slice(), b.as_slice());
    let c = c.as_mut_slice();
    for i in 0..n {
        for j in 0..n {
            for p in 0..n {
                let prod = a[i * n + p].wrapping_mul(b[p * n + j]);
                c[i * n + j] = c[i * n + j].wrapping_add(prod);
            }
        }
    }
}
