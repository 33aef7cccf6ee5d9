//! Square integer matrices and the reference kernels.
//!
//! [`Matrix`] is the only storage type in the crate: an owned, row-major
//! `n × n` buffer of `u64`. The kernels take matrices by reference and
//! accumulate into a caller-owned result, so the caller decides when results
//! are zeroed.

pub mod horizontal;
pub mod naive_ijk;
pub mod transpose;

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::{BenchError, Result};

/// Entries produced by [`Matrix::random`] lie in `0..VALUE_RANGE`.
pub const VALUE_RANGE: u64 = 10;

/// Square `n × n` matrix of `u64`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<u64>,
}

impl Matrix {
    /// All-zero `n × n` matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Builds a matrix from literal rows.
    ///
    /// # Panics
    ///
    /// Panics if the number of rows is not `N` (the matrix must be square).
    ///
    /// # Example
    ///
    /// ```
    /// use tilebench::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]);
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_rows<const N: usize>(rows: &[[u64; N]]) -> Self {
        assert_eq!(rows.len(), N, "expected {} rows, got {}", N, rows.len());
        Self {
            n: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Wraps a flat row-major buffer of `n * n` entries.
    pub fn from_vec(n: usize, data: Vec<u64>) -> Result<Self> {
        if n.checked_mul(n) != Some(data.len()) {
            return Err(BenchError::Shape(format!(
                "expected {}x{} elements, got {}",
                n,
                n,
                data.len()
            )));
        }
        Ok(Self { n, data })
    }

    /// `n × n` matrix with entries drawn uniformly from `0..VALUE_RANGE`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let data = (0..n * n)
            .map(|_| rng.random_range(0..VALUE_RANGE))
            .collect();
        Self { n, data }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.data
    }

    pub fn row(&self, r: usize) -> &[u64] {
        &self.data[r * self.n..(r + 1) * self.n]
    }

    /// Resets every entry to zero. Kernels accumulate, so results must be
    /// cleared before each invocation.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u64;

    fn index(&self, (r, c): (usize, usize)) -> &u64 {
        &self.data[r * self.n + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut u64 {
        &mut self.data[r * self.n + c]
    }
}

/// Fills both operands with fresh random entries from one generator.
///
/// Entries are drawn interleaved (`a[r][c]` then `b[r][c]`), so a given seed
/// always yields the same pair.
pub fn initialize<R: Rng + ?Sized>(a: &mut Matrix, b: &mut Matrix, rng: &mut R) {
    assert_eq!(a.n, b.n, "operands must have the same size");
    for (x, y) in a.data.iter_mut().zip(b.data.iter_mut()) {
        *x = rng.random_range(0..VALUE_RANGE);
        *y = rng.random_range(0..VALUE_RANGE);
    }
}
