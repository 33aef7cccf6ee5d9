//! Tiled horizontal multiplication.

use crate::error::{BenchError, Result};
use crate::matrix::Matrix;

/// Checks that `tile` can block an `n × n` matrix with no remainder.
///
/// There is no edge-tile handling, so a tile that does not divide `n`
/// evenly is rejected instead of computing a partial result.
pub fn check_tile(n: usize, tile: usize) -> Result<()> {
    if tile == 0 || n % tile != 0 {
        return Err(BenchError::TileSize { tile, size: n });
    }
    Ok(())
}

/// Horizontal multiplication with the row loops blocked into tiles: C += A * B
///
/// `bt` must already hold B^T, same as
/// [`matmul_horizontal`](crate::matrix::horizontal::matmul_horizontal).
///
/// Loop structure:
/// - Outer pair: tile origins over rows of A and rows of B^T, stride `tile`
/// - Middle: the reduction index, full length
/// - Inner pair: `tile × tile` block of C
///
/// Between reuses, only `tile` rows of each operand are live, so the tile
/// size controls the working set. Which size is fastest depends on the
/// cache hierarchy, and finding it is the point of the benchmark.
///
/// Returns [`BenchError::TileSize`] without touching `c` if `tile` does not
/// evenly divide the matrix size.
///
/// # Panics
///
/// Panics if the three matrices are not the same size.
pub fn matmul_tiled(a: &Matrix, bt: &Matrix, c: &mut Matrix, tile: usize) -> Result<()> {
    let n = a.size();
    assert_eq!(bt.size(), n, "B^T: expected {}x{}", n, n);
    assert_eq!(c.size(), n, "C: expected {}x{}", n, n);
    check_tile(n, tile)?;

    let (a, bt) = (a.as_slice(), bt.as_slice());
    let c = c.as_mut_slice();
    for ii in (0..n).step_by(tile) {
        for jj in (0..n).step_by(tile) {
            for p in 0..n {
                for i in ii..ii + tile {
                    let a_ip = a[i * n + p];
                    for j in jj..jj + tile {
                        let prod = a_ip.wrapping_mul(bt[j * n + p]);
                        c[i * n + j] = c[i * n + j].wrapping_add(prod);
                    }
                }
            }
        }
    }
    Ok(())
}
