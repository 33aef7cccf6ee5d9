//! How much do loop order and cache tiling matter for matrix multiplication?
//!
//! This crate times three ways of computing C = A * B for square `u64`
//! matrices:
//!
//! - **naive** (i-j-k): walks B down its columns, one cache miss per step
//! - **horizontal**: transposes B first, then walks both operands along rows
//! - **tiled**: horizontal, with the row loops blocked into square tiles
//!
//! Every optimized result is checked against the naive one, and the tiled
//! kernel is timed for each power-of-two tile size up to a limit.
//!
//! ## Usage
//!
//! ```
//! use tilebench::blocked::tiled::matmul_tiled;
//! use tilebench::matrix::Matrix;
//! use tilebench::matrix::naive_ijk::matmul_naive_ijk;
//! use tilebench::matrix::transpose::transpose_in_place;
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]);
//! let mut b = Matrix::from_rows(&[[5, 6], [7, 8]]);
//!
//! let mut c = Matrix::zeros(2);
//! matmul_naive_ijk(&a, &b, &mut c);
//!
//! transpose_in_place(&mut b);
//! let mut c_tiled = Matrix::zeros(2);
//! matmul_tiled(&a, &b, &mut c_tiled, 2).unwrap();
//!
//! assert_eq!(c, c_tiled);
//! ```
//!
//! Full runs go through [`BenchmarkRunner`]:
//!
//! ```
//! use tilebench::{BenchConfig, BenchmarkRunner};
//!
//! let config = BenchConfig::new(2, 3).with_size(32).with_seed(1);
//! let summary = BenchmarkRunner::new(config).unwrap().run().unwrap();
//!
//! assert_eq!(summary.tiled.len(), 4); // tiles 1, 2, 4, 8
//! assert_eq!(summary.mismatches, 0);
//! ```

pub mod blocked;
pub mod config;
pub mod error;
pub mod matrix;
pub mod report;
pub mod runner;
pub mod verify;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use matrix::Matrix;
pub use runner::{BenchmarkRunner, Kernel, Sample, Summary};
pub use verify::{Mismatch, verify};
