//! Resize, pad and crop, all expressed as one rectangle transform.

use super::BitGrid;
use crate::error::{Error, Result};
use crate::models::{BitVector, Rect};

impl BitGrid {
    /// Current bounds as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Replace the grid with the cells under `rect`.
    ///
    /// `rect` is in current coordinates and may reach past any edge; cells
    /// outside the old grid come back clear. Growing on one side while
    /// shrinking on another is a single call.
    pub fn transform(&mut self, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Err(Error::invalid_argument(format!(
                "transform target must be positive, got {}x{}",
                rect.width, rect.height
            )));
        }
        let mut rows = vec![BitVector::zeros(rect.width); rect.height];
        let overlap = self.bounds().intersect(&rect);
        if let Some(overlap) = overlap {
            let src_col = overlap.left as usize;
            let dst_col = overlap.left.abs_diff(rect.left);
            let src_row = overlap.top as usize;
            let dst_row = overlap.top.abs_diff(rect.top);
            for i in 0..overlap.height {
                rows[dst_row + i] = shifted_window(
                    &self.rows[src_row + i],
                    src_col,
                    dst_col,
                    overlap.width,
                    rect.width,
                );
            }
        }

        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "GRID: transform {}x{} -> {:?} (overlap {:?})",
                self.width, self.height, rect, overlap
            );
        }

        self.rows = rows;
        self.width = rect.width;
        self.height = rect.height;
        Ok(())
    }

    /// Keep the top-left `new_width x new_height` cells, padding with clear
    /// cells where the grid grows.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<()> {
        self.transform(Rect::new(0, 0, new_width, new_height))
    }

    /// Grow (positive) or crop (negative) each edge by the given amount.
    pub fn pad(&mut self, top: isize, bottom: isize, left: isize, right: isize) -> Result<()> {
        let new_width = padded_extent(self.width, left, right);
        let new_height = padded_extent(self.height, top, bottom);
        let (Some(new_width), Some(new_height)) = (new_width, new_height) else {
            return Err(Error::invalid_argument(format!(
                "padding ({top}, {bottom}, {left}, {right}) of a {}x{} grid leaves no cells",
                self.width, self.height
            )));
        };
        let (Some(origin_left), Some(origin_top)) = (left.checked_neg(), top.checked_neg()) else {
            return Err(Error::invalid_argument("padding origin overflows isize"));
        };
        self.transform(Rect::new(origin_left, origin_top, new_width, new_height))
    }
}

/// `extent + before + after` when it is positive and fits in `usize`.
fn padded_extent(extent: usize, before: isize, after: isize) -> Option<usize> {
    let total = extent as i128 + before as i128 + after as i128;
    usize::try_from(total).ok().filter(|&n| n > 0)
}

/// `count` bits of `src` starting at `src_col`, placed at `dst_col` in a new
/// row of `width` bits. One of the two offsets is always zero.
fn shifted_window(
    src: &BitVector,
    src_col: usize,
    dst_col: usize,
    count: usize,
    width: usize,
) -> BitVector {
    let mut row = src.clone();
    row.shift_right(src_col);
    row.set_length(count);
    row.set_length(width);
    row.shift_left(dst_col);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BitGrid {
        let mut grid = BitGrid::new(5, 4).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(1, 3, true).unwrap();
        grid.set(3, 4, true).unwrap();
        grid
    }

    #[test]
    fn test_resize_grow_keeps_origin() {
        let mut grid = sample();
        grid.resize(7, 6).unwrap();
        assert_eq!((grid.width(), grid.height()), (7, 6));
        assert!(grid.get(0, 0).unwrap());
        assert!(grid.get(3, 4).unwrap());
        assert_eq!(grid.population_count(), 3);
    }

    #[test]
    fn test_resize_shrink_drops_cells() {
        let mut grid = sample();
        grid.resize(4, 2).unwrap();
        assert_eq!(grid.population_count(), 2);
        assert!(grid.resize(0, 2).is_err());
    }

    #[test]
    fn test_pad_offsets_content() {
        let mut grid = sample();
        grid.pad(1, 0, 2, 0).unwrap();
        assert_eq!((grid.width(), grid.height()), (7, 5));
        assert!(grid.get(1, 2).unwrap());
        assert!(grid.get(2, 5).unwrap());
        assert!(grid.get(4, 6).unwrap());
    }

    #[test]
    fn test_pad_negative_crops() {
        let mut grid = sample();
        grid.pad(-1, -2, -3, 0).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 1));
        assert!(grid.get(0, 0).unwrap());
        assert_eq!(grid.population_count(), 1);
        assert!(grid.pad(0, 0, -1, -1).is_err());
        assert!(matches!(
            grid.pad(isize::MIN, 0, 0, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            grid.pad(0, 0, isize::MAX, isize::MAX),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            grid.pad(0, 0, isize::MIN, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!((grid.width(), grid.height()), (2, 1));

        // Huge opposite edges that cancel out leave the width unchanged.
        grid.pad(0, 0, isize::MAX, isize::MIN + 1).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 1));
        assert_eq!(grid.population_count(), 0);
    }

    #[test]
    fn test_transform_grow_one_side_shrink_other() {
        let mut grid = sample();
        grid.transform(Rect::new(2, -1, 6, 3)).unwrap();
        assert_eq!((grid.width(), grid.height()), (6, 3));
        assert!(grid.get(2, 1).unwrap());
        assert_eq!(grid.population_count(), 1);
    }

    #[test]
    fn test_transform_without_overlap_is_clear() {
        let mut grid = sample();
        grid.transform(Rect::new(10, 10, 3, 3)).unwrap();
        assert_eq!(grid.population_count(), 0);
    }

    #[test]
    fn test_transform_far_off_grid_is_clear() {
        let mut grid = sample();
        grid.transform(Rect::new(isize::MAX, 0, 2, 1)).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 1));
        assert_eq!(grid.population_count(), 0);

        let mut grid = sample();
        grid.transform(Rect::new(isize::MIN, isize::MIN, 3, 3)).unwrap();
        assert_eq!(grid.population_count(), 0);
    }
}
