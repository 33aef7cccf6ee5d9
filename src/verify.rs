//! Result verification against the naive baseline.

use std::fmt;

use crate::matrix::Matrix;

/// First disagreement between a kernel's result and the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The two matrices are not the same size.
    Size { expected: usize, actual: usize },
    /// Cell `(row, col)` differs.
    Value {
        row: usize,
        col: usize,
        expected: u64,
        actual: u64,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Size { expected, actual } => write!(
                f,
                "size mismatch: expected {}x{}, got {}x{}",
                expected, expected, actual, actual
            ),
            Mismatch::Value {
                row,
                col,
                expected,
                actual,
            } => write!(
                f,
                "mismatch at ({}, {}): expected {}, got {}",
                row, col, expected, actual
            ),
        }
    }
}

/// Compares two results element by element, stopping at the first
/// difference.
///
/// A mismatch means a kernel is wrong, not slow. The runner logs it and
/// keeps going.
pub fn verify(expected: &Matrix, actual: &Matrix) -> Result<(), Mismatch> {
    let n = expected.size();
    if actual.size() != n {
        return Err(Mismatch::Size {
            expected: n,
            actual: actual.size(),
        });
    }

    match expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .position(|(e, a)| e != a)
    {
        None => Ok(()),
        Some(idx) => Err(Mismatch::Value {
            row: idx / n,
            col: idx % n,
            expected: expected.as_slice()[idx],
            actual: actual.as_slice()[idx],
        }),
    }
}

/// `true` if the two results agree everywhere.
pub fn matches(expected: &Matrix, actual: &Matrix) -> bool {
    verify(expected, actual).is_ok()
}
