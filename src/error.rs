//! Error types for the benchmark harness.

use thiserror::Error;

/// Errors that stop a run before any timing happens.
///
/// Verification mismatches are not here: they are reported through
/// [`crate::verify::Mismatch`] and never abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("tile size {tile} does not evenly divide matrix size {size}")]
    TileSize { tile: usize, size: usize },

    #[error("malformed matrix: {0}")]
    Shape(String),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_display() {
        let error = BenchError::TileSize { tile: 3, size: 1024 };
        let display = error.to_string();
        assert!(display.contains("tile size 3"));
        assert!(display.contains("1024"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = BenchError::InvalidConfig("trials must be at least 1".into());
        assert_eq!(
            error.to_string(),
            "invalid configuration: trials must be at least 1"
        );
    }
}
