use super::Matrix;

/// Transpose a square matrix in place: b = b^T
///
/// Swaps every pair across the diagonal, leaving the diagonal alone. After
/// this, row j of `b` holds what was column j, which is the layout the
/// horizontal and tiled kernels expect.
///
/// Calling it twice gives back the original matrix, so callers have to keep
/// track of which orientation `b` is in.
///
/// # Example
///
/// ```
/// use tilebench::matrix::Matrix;
/// use tilebench::matrix::transpose::transpose_in_place;
///
/// let mut b = Matrix::from_rows(&[[1, 2],
///                                 [3, 4]]);
/// transpose_in_place(&mut b);
///
/// assert_eq!(b, Matrix::from_rows(&[[1, 3],
///                                   [2, 4]]));
/// ```
pub fn transpose_in_place(b: &mut Matrix) {
    let n = b.size();
    let data = b.as_mut_slice();
    for row in 0..n {
        for col in 0..row {
            data.swap(row * n + col, col * n + row);
        }
    }
}
