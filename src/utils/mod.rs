//! Utility functions
//!
//! - Word-level bit helpers shared by the vector and grid code
//! - Binarization (grayscale pixels to bit grids)

pub mod binarization;
pub mod words;
