//! Grayscale to bit-grid conversion.

use crate::error::{Error, Result};
use crate::models::{BitGrid, BitVector};
use rayon::prelude::*;

/// Convert grayscale pixels (row-major, one byte each) to a grid where
/// `true` means darker than `threshold`.
pub fn threshold_binarize(gray: &[u8], width: usize, height: usize, threshold: u8) -> Result<BitGrid> {
    if width.checked_mul(height) != Some(gray.len()) {
        return Err(Error::invalid_argument(format!(
            "{} pixels do not fill a {width}x{height} image",
            gray.len()
        )));
    }
    if width == 0 {
        return BitGrid::new(width, height);
    }
    let rows: Vec<BitVector> = gray
        .par_chunks(width)
        .map(|row| row.iter().map(|&pixel| pixel < threshold).collect::<BitVector>())
        .collect();
    BitGrid::from_rows(rows)
}

/// Binarize with the threshold chosen by [`otsu_threshold`].
pub fn otsu_binarize(gray: &[u8], width: usize, height: usize) -> Result<BitGrid> {
    threshold_binarize(gray, width, height, otsu_threshold(gray))
}

/// Otsu's threshold: the split maximizing between-class variance.
///
/// Pixels strictly below the returned value form the dark class.
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total = gray.len() as f64;
    let total_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut dark_count = 0.0;
    let mut dark_sum = 0.0;
    let mut best_variance = 0.0;
    let mut best = 128u8;

    // Candidate t puts intensities 0..t in the dark class.
    for t in 1..=255usize {
        dark_count += histogram[t - 1] as f64;
        dark_sum += (t - 1) as f64 * histogram[t - 1] as f64;
        let light_count = total - dark_count;
        if dark_count == 0.0 || light_count == 0.0 {
            continue;
        }
        let dark_mean = dark_sum / dark_count;
        let light_mean = (total_sum - dark_sum) / light_count;
        let variance = dark_count * light_count * (dark_mean - light_mean).powi(2);
        if variance > best_variance {
            best_variance = variance;
            best = t as u8;
        }
    }

    best
}
