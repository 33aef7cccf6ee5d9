//! Cache-blocked multiplication.
//!
//! Same arithmetic as the horizontal kernel, with the two row loops broken
//! into square tiles so the rows being reused stay in L1/L2 cache.
//!
//! Available implementations:
//! - `tiled`: horizontal multiplication with `tile × tile` blocks of C

pub mod tiled;
