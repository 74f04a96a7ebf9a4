//! Rectangular bit plane stored as one [`BitVector`] per row.
//!
//! Every row has exactly `width` bits. Rows are only handed out as shared
//! references, so nothing outside the grid can change a row's length.

mod area;
mod codec;
mod transform;

use crate::config;
use crate::error::{Error, Result};
use crate::models::bit_vector::{BitVector, LogicOp};
use rayon::prelude::*;

/// 2-D grid of bits addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitGrid {
    width: usize,
    height: usize,
    rows: Vec<BitVector>,
}

impl BitGrid {
    /// Create an all-clear grid; both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_argument(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            rows: vec![BitVector::zeros(width); height],
        })
    }

    /// Build a grid from equal-length, non-empty rows.
    pub fn from_rows(rows: Vec<BitVector>) -> Result<Self> {
        let width = rows.first().map_or(0, BitVector::len);
        if width == 0 {
            return Err(Error::invalid_argument("grid needs at least one non-empty row"));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(Error::invalid_argument(format!(
                "row {bad} has {} bits, expected {width}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            width,
            height: rows.len(),
            rows,
        })
    }

    /// Alternating pattern; cell `(0, 0)` is `first`.
    pub fn checkerboard(width: usize, height: usize, first: bool) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for (r, row) in grid.rows.iter_mut().enumerate() {
            let even = (0..width).map(|c| ((r + c) % 2 == 0) == first);
            *row = even.collect();
        }
        Ok(grid)
    }

    /// Columns per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate rows from the top.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &BitVector> {
        self.rows.iter()
    }

    /// Read cell `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check_row(row)?;
        self.rows[row].get(col)
    }

    /// Write cell `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        self.check_row(row)?;
        self.rows[row].set(col, value)
    }

    /// Flip cell `(row, col)`.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_row(row)?;
        self.rows[row].toggle(col)
    }

    /// Shared reference to row `row`; it stays owned by the grid.
    pub fn get_row(&self, row: usize) -> Result<&BitVector> {
        self.check_row(row)?;
        Ok(&self.rows[row])
    }

    /// Copy the first `min(width, source.len())` bits of `source` into `row`.
    pub fn set_row(&mut self, source: &BitVector, row: usize) -> Result<()> {
        self.check_row(row)?;
        let count = self.width.min(source.len());
        self.rows[row].copy_bits(0, source, 0, count);
        Ok(())
    }

    /// Column `col` as a new vector of `height` bits (walks every row).
    pub fn get_column(&self, col: usize) -> Result<BitVector> {
        self.check_col(col)?;
        Ok(self.rows.iter().map(|row| row.bit(col)).collect())
    }

    /// Write the first `min(height, source.len())` bits of `source` down
    /// column `col`.
    pub fn set_column(&mut self, source: &BitVector, col: usize) -> Result<()> {
        self.check_col(col)?;
        for (i, row) in self.rows.iter_mut().take(source.len()).enumerate() {
            row.set(col, source.bit(i))?;
        }
        Ok(())
    }

    /// Set every cell to `state`.
    pub fn clear(&mut self, state: bool) {
        self.for_each_row(|row| row.set_all(state));
    }

    /// Flip every cell.
    pub fn invert(&mut self) {
        self.for_each_row(BitVector::not);
    }

    /// Cell-wise AND with a grid of the same size.
    pub fn and(&mut self, other: &BitGrid) -> Result<()> {
        self.combine(other, LogicOp::And)
    }

    /// Cell-wise OR with a grid of the same size.
    pub fn or(&mut self, other: &BitGrid) -> Result<()> {
        self.combine(other, LogicOp::Or)
    }

    /// Cell-wise XOR with a grid of the same size.
    pub fn xor(&mut self, other: &BitGrid) -> Result<()> {
        self.combine(other, LogicOp::Xor)
    }

    /// Number of set cells.
    pub fn population_count(&self) -> usize {
        self.rows.iter().map(BitVector::population_count).sum()
    }

    fn combine(&mut self, other: &BitGrid, op: LogicOp) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::invalid_argument(format!(
                "grid size mismatch: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        if self.height >= config::parallel_row_threshold() {
            self.rows
                .par_iter_mut()
                .zip(other.rows.par_iter())
                .for_each(|(dst, src)| dst.combine_words(src, op));
        } else {
            for (dst, src) in self.rows.iter_mut().zip(&other.rows) {
                dst.combine_words(src, op);
            }
        }
        Ok(())
    }

    fn for_each_row<F>(&mut self, f: F)
    where
        F: Fn(&mut BitVector) + Send + Sync,
    {
        if self.height >= config::parallel_row_threshold() {
            self.rows.par_iter_mut().for_each(|row| f(row));
        } else {
            self.rows.iter_mut().for_each(|row| f(row));
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.height {
            return Err(Error::out_of_range(row, self.height));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.width {
            return Err(Error::out_of_range(col, self.width));
        }
        Ok(())
    }
}
