//! Command-line arguments and the validated run configuration.

use clap::Parser;

use crate::blocked::tiled::check_tile;
use crate::error::{BenchError, Result};

/// Matrix side length when `--size` is not given.
pub const DEFAULT_SIZE: usize = 1024;

/// Time naive, horizontal and tiled matrix multiplication.
#[derive(Debug, Parser)]
#[command(name = "tilebench", version)]
pub struct Args {
    /// How many times to run every kernel (at least 1)
    pub trials: usize,

    /// Largest tile power: tile sizes 2^0 ..= 2^POWER are timed
    pub power: u32,

    /// Matrix side length; 2^POWER must divide it
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Seed for the operand generator (random if omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log level for diagnostics on stderr; RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Builds and validates the run configuration.
    pub fn to_config(&self) -> Result<BenchConfig> {
        let config = BenchConfig {
            trials: self.trials,
            max_power: self.power,
            size: self.size,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parameters of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub trials: usize,
    /// Tile sizes run from `2^0` to `2^max_power` inclusive.
    pub max_power: u32,
    pub size: usize,
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn new(trials: usize, max_power: u32) -> Self {
        Self {
            trials,
            max_power,
            size: DEFAULT_SIZE,
            seed: None,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations that cannot run to completion.
    ///
    /// Every tile size is a power of two up to `2^max_power`, so if the
    /// largest one divides `size`, all of them do.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig(
                "trials must be at least 1".into(),
            ));
        }
        if self.size == 0 {
            return Err(BenchError::InvalidConfig(
                "matrix size must be at least 1".into(),
            ));
        }
        let bytes = self
            .size
            .checked_mul(self.size)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<u64>()));
        if !bytes.is_some_and(|b| b <= isize::MAX as usize) {
            return Err(BenchError::InvalidConfig(format!(
                "matrix size {} is too large",
                self.size
            )));
        }
        let max_tile = 1usize.checked_shl(self.max_power).ok_or_else(|| {
            BenchError::InvalidConfig(format!("tile power {} is too large", self.max_power))
        })?;
        check_tile(self.size, max_tile)
    }

    /// Tile sizes in the order they are run: `1, 2, 4, ..., 2^max_power`.
    ///
    /// # Panics
    ///
    /// Panics if `2^max_power` does not fit in `usize`; call
    /// [`validate`](Self::validate) first.
    pub fn tile_sizes(&self) -> Vec<usize> {
        (0..=self.max_power).map(tile_for_power).collect()
    }

    /// Largest tile size, `2^max_power`.
    ///
    /// # Panics
    ///
    /// Same condition as [`tile_sizes`](Self::tile_sizes).
    pub fn max_tile(&self) -> usize {
        tile_for_power(self.max_power)
    }
}

fn tile_for_power(power: u32) -> usize {
    match 1usize.checked_shl(power) {
        Some(tile) => tile,
        None => panic!("tile power {} does not fit in usize", power),
    }
}
