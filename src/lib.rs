//! bitplane - packed bit vectors and 2-D bit grids
//!
//! [`BitVector`] stores an arbitrary number of bits in 64-bit words and
//! supports shifts, rotations, trimming, counting and conversions.
//! [`BitGrid`] stacks equal-length vectors into a rectangular pixel map with
//! rectangle copies, fills, boolean combination and resizing.
//!
//! ```
//! use bitplane::{BitGrid, BitVector};
//!
//! let mut v = BitVector::zeros(10);
//! v.set(3, true).unwrap();
//! v.set(7, true).unwrap();
//! assert_eq!(v.population_count(), 2);
//! assert_eq!(v.leading_zero_count(), 2);
//! assert_eq!(v.trailing_zero_count(), 3);
//!
//! let board = BitGrid::checkerboard(4, 4, true).unwrap();
//! assert_eq!(board.population_count(), 8);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven tuning
pub mod config;
mod debug;
/// Crate error type
pub mod error;
/// Core data structures (BitVector, BitGrid, Rect)
pub mod models;
/// Image import/export for grids
pub mod tools;
/// Word helpers and grayscale binarization
pub mod utils;

pub use error::{Error, Result};
pub use models::{BitCursor, BitFormat, BitGrid, BitOrder, BitVector, Bits, Rect};
