//! Trial loop: runs every kernel, times it, checks it, and keeps the sums.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::blocked::tiled::matmul_tiled;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::matrix::horizontal::matmul_horizontal;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::transpose::transpose_in_place;
use crate::matrix::{self, Matrix};
use crate::verify::{Mismatch, verify};

/// Which kernel a timing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    Naive,
    Horizontal,
    /// Tiled kernel with the given tile size.
    Tiled(usize),
}

impl Kernel {
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Naive => "matmul_naive",
            Kernel::Horizontal => "matmul_horizontal",
            Kernel::Tiled(_) => "matmul_tiled",
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kernel::Tiled(tile) => write!(f, "{} (tile {})", self.name(), tile),
            _ => f.write_str(self.name()),
        }
    }
}

/// One timed kernel invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// 1-based trial index.
    pub trial: usize,
    pub kernel: Kernel,
    pub elapsed: Duration,
    /// Set when the result disagreed with the naive baseline.
    pub mismatch: Option<Mismatch>,
}

/// Running sum of elapsed seconds for one kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    total: f64,
    samples: usize,
}

impl Accumulator {
    pub fn add(&mut self, seconds: f64) {
        self.total += seconds;
        self.samples += 1;
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Mean of the recorded times, or 0 if nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.total / self.samples as f64
    }
}

/// Average seconds per kernel after all trials.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub trials: usize,
    pub size: usize,
    pub naive: f64,
    pub horizontal: f64,
    /// `(tile size, average seconds)`, smallest tile first.
    pub tiled: Vec<(usize, f64)>,
    /// Verification failures across all trials.
    pub mismatches: usize,
}

impl Summary {
    /// Tile size with the lowest average time.
    pub fn best_tile(&self) -> Option<(usize, f64)> {
        self.tiled
            .iter()
            .copied()
            .min_by(|x, y| x.1.total_cmp(&y.1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Natural,
    Transposed,
}

/// Owns the operands, the per-kernel results and the timing sums.
///
/// A and B are generated once. B is transposed in place before the
/// horizontal and tiled kernels and put back at the end of every trial, so
/// each trial starts from the same inputs.
pub struct BenchmarkRunner {
    config: BenchConfig,
    a: Matrix,
    b: Matrix,
    orientation: Orientation,
    naive: Matrix,
    horizontal: Matrix,
    tiled: Matrix,
    naive_time: Accumulator,
    horizontal_time: Accumulator,
    tiled_time: Vec<(usize, Accumulator)>,
    mismatches: usize,
}

impl BenchmarkRunner {
    /// Validates `config` and fills A and B from the seeded generator
    /// (or the OS one if no seed was given).
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut a = Matrix::zeros(config.size);
        let mut b = Matrix::zeros(config.size);
        matrix::initialize(&mut a, &mut b, &mut rng);
        Self::with_operands(config, a, b)
    }

    /// Uses the given operands instead of random ones.
    pub fn with_operands(config: BenchConfig, a: Matrix, b: Matrix) -> Result<Self> {
        config.validate()?;
        let n = config.size;
        if a.size() != n || b.size() != n {
            return Err(BenchError::Shape(format!(
                "operands must be {}x{}, got A {}x{} and B {}x{}",
                n,
                n,
                a.size(),
                a.size(),
                b.size(),
                b.size()
            )));
        }

        let tiled_time = config
            .tile_sizes()
            .into_iter()
            .map(|tile| (tile, Accumulator::default()))
            .collect();

        Ok(Self {
            a,
            b,
            orientation: Orientation::Natural,
            naive: Matrix::zeros(n),
            horizontal: Matrix::zeros(n),
            tiled: Matrix::zeros(n),
            naive_time: Accumulator::default(),
            horizontal_time: Accumulator::default(),
            tiled_time,
            mismatches: 0,
            config,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Operand A.
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Operand B. Always in natural orientation between trials.
    pub fn b(&self) -> &Matrix {
        &self.b
    }

    pub fn naive_result(&self) -> &Matrix {
        &self.naive
    }

    pub fn horizontal_result(&self) -> &Matrix {
        &self.horizontal
    }

    /// Result of the last tiled run (the largest tile size).
    pub fn tiled_result(&self) -> &Matrix {
        &self.tiled
    }

    /// Runs all configured trials silently.
    pub fn run(&mut self) -> Result<Summary> {
        self.run_with(|_| {})
    }

    /// Runs all configured trials, handing every sample to `on_sample` as
    /// soon as it is taken.
    pub fn run_with<F>(&mut self, mut on_sample: F) -> Result<Summary>
    where
        F: FnMut(&Sample),
    {
        info!(
            trials = self.config.trials,
            max_power = self.config.max_power,
            size = self.config.size,
            "starting benchmark"
        );
        for trial in 1..=self.config.trials {
            self.run_trial(trial, &mut on_sample)?;
        }
        let summary = self.summary();
        info!(mismatches = summary.mismatches, "benchmark finished");
        Ok(summary)
    }

    /// One pass over naive, horizontal and every tile size.
    #[instrument(level = "debug", skip(self, on_sample))]
    pub fn run_trial<F>(&mut self, trial: usize, on_sample: &mut F) -> Result<()>
    where
        F: FnMut(&Sample),
    {
        // naive, against B as generated
        self.set_orientation(Orientation::Natural);
        self.naive.clear();
        let ((), elapsed) = timed(|| {
            matmul_naive_ijk(black_box(&self.a), black_box(&self.b), &mut self.naive);
            black_box(&self.naive);
        });
        self.naive_time.add(elapsed.as_secs_f64());
        self.emit(trial, Kernel::Naive, elapsed, None, on_sample);

        // horizontal, against B^T
        self.horizontal.clear();
        self.set_orientation(Orientation::Transposed);
        let ((), elapsed) = timed(|| {
            matmul_horizontal(black_box(&self.a), black_box(&self.b), &mut self.horizontal);
            black_box(&self.horizontal);
        });
        self.horizontal_time.add(elapsed.as_secs_f64());
        let mismatch = verify(&self.naive, &self.horizontal).err();
        self.emit(trial, Kernel::Horizontal, elapsed, mismatch, on_sample);

        for idx in 0..self.tiled_time.len() {
            let tile = self.tiled_time[idx].0;
            self.tiled.clear();
            let (done, elapsed) = timed(|| {
                let done =
                    matmul_tiled(black_box(&self.a), black_box(&self.b), &mut self.tiled, tile);
                black_box(&self.tiled);
                done
            });
            done?;
            self.tiled_time[idx].1.add(elapsed.as_secs_f64());
            let mismatch = verify(&self.naive, &self.tiled).err();
            self.emit(trial, Kernel::Tiled(tile), elapsed, mismatch, on_sample);
        }

        self.set_orientation(Orientation::Natural);
        Ok(())
    }

    /// Averages over the samples recorded so far.
    pub fn summary(&self) -> Summary {
        Summary {
            trials: self.naive_time.samples(),
            size: self.config.size,
            naive: self.naive_time.average(),
            horizontal: self.horizontal_time.average(),
            tiled: self
                .tiled_time
                .iter()
                .map(|(tile, acc)| (*tile, acc.average()))
                .collect(),
            mismatches: self.mismatches,
        }
    }

    fn set_orientation(&mut self, target: Orientation) {
        if self.orientation != target {
            transpose_in_place(&mut self.b);
            self.orientation = target;
        }
    }

    fn emit<F>(
        &mut self,
        trial: usize,
        kernel: Kernel,
        elapsed: Duration,
        mismatch: Option<Mismatch>,
        on_sample: &mut F,
    ) where
        F: FnMut(&Sample),
    {
        if let Some(m) = &mismatch {
            self.mismatches += 1;
            warn!(trial, %kernel, "result differs from naive baseline: {}", m);
        }
        debug!(trial, %kernel, seconds = elapsed.as_secs_f64(), "kernel finished");
        on_sample(&Sample {
            trial,
            kernel,
            elapsed,
            mismatch,
        });
    }
}

/// Runs `f` once and returns its output with the wall-clock time it took.
fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
