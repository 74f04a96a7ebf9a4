//! Image import/export and summaries for pixel-map grids.

use crate::config;
use crate::error::Result;
use crate::models::BitGrid;
use crate::utils::binarization::{otsu_threshold, threshold_binarize};
use image::{GrayImage, Luma};
use std::path::Path;

/// Load an image as a grid: a cell is set when its luma is below `threshold`.
///
/// Without an explicit threshold, `BITPLANE_IMAGE_THRESHOLD` is used if set,
/// otherwise Otsu's method picks one for the image.
pub fn load_grid<P: AsRef<Path>>(path: P, threshold: Option<u8>) -> Result<BitGrid> {
    let gray = image::open(path.as_ref())?.to_luma8();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    let pixels = gray.into_raw();
    let threshold = threshold
        .or_else(config::image_threshold_override)
        .unwrap_or_else(|| otsu_threshold(&pixels));

    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        eprintln!(
            "TOOLS: {} is {}x{}, threshold {}",
            path.as_ref().display(),
            width,
            height,
            threshold
        );
    }

    threshold_binarize(&pixels, width, height, threshold)
}

/// Grid as a grayscale image: set cells black, clear cells white.
pub fn grid_to_image(grid: &BitGrid) -> GrayImage {
    let mut img = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, bit) in row.iter().enumerate() {
            let luma = if bit { 0 } else { 255 };
            img.put_pixel(x as u32, y as u32, Luma([luma]));
        }
    }
    img
}

/// Write the grid as an image; the format follows the file extension.
pub fn save_grid<P: AsRef<Path>>(grid: &BitGrid, path: P) -> Result<()> {
    grid_to_image(grid).save(path)?;
    Ok(())
}

/// Summary statistics for a grid.
#[derive(Debug, Clone, Copy)]
pub struct GridStats {
    /// Count of set cells.
    pub set_cells: usize,
    /// Total cells in the grid.
    pub total_cells: usize,
    /// Ratio of set cells to total cells.
    pub set_ratio: f64,
}

/// Count set cells.
pub fn grid_stats(grid: &BitGrid) -> GridStats {
    let set_cells = grid.population_count();
    let total_cells = grid.width() * grid.height();
    GridStats {
        set_cells,
        total_cells,
        set_ratio: set_cells as f64 / total_cells as f64,
    }
}
