//! Rectangle reads, copies and fills.

use super::BitGrid;
use crate::error::{Error, Result};

impl BitGrid {
    /// Copy the `w x h` rectangle at `(row, col)` into a new grid.
    pub fn get_area(&self, row: usize, col: usize, w: usize, h: usize) -> Result<BitGrid> {
        self.check_area(row, col, w, h)?;
        let mut area = BitGrid::new(w, h)?;
        for (dst, src) in area.rows.iter_mut().zip(&self.rows[row..row + h]) {
            dst.copy_bits(0, src, col, w);
        }
        Ok(area)
    }

    /// Copy the `w x h` rectangle of `source` at `(src_row, src_col)` to
    /// `(row, col)` in this grid.
    ///
    /// Both rectangles are validated before any cell is written.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_area_from(
        &mut self,
        source: &BitGrid,
        row: usize,
        col: usize,
        w: usize,
        h: usize,
        src_row: usize,
        src_col: usize,
    ) -> Result<()> {
        source.check_area(src_row, src_col, w, h)?;
        self.check_area(row, col, w, h)?;
        for (dst, src) in self.rows[row..row + h]
            .iter_mut()
            .zip(&source.rows[src_row..src_row + h])
        {
            dst.copy_bits(col, src, src_col, w);
        }
        Ok(())
    }

    /// Copy all of `source` with its top-left corner at `(row, col)`.
    pub fn paste(&mut self, source: &BitGrid, row: usize, col: usize) -> Result<()> {
        self.copy_area_from(source, row, col, source.width, source.height, 0, 0)
    }

    /// Fill (`Some(state)`) or toggle (`None`) the `w x h` rectangle at
    /// `(row, col)`.
    pub fn set_area(
        &mut self,
        row: usize,
        col: usize,
        w: usize,
        h: usize,
        state: Option<bool>,
    ) -> Result<()> {
        self.check_area(row, col, w, h)?;
        if row == 0 && col == 0 && w == self.width && h == self.height {
            match state {
                Some(value) => self.clear(value),
                None => self.invert(),
            }
            return Ok(());
        }
        for target in &mut self.rows[row..row + h] {
            target.set_range(col, w, state)?;
        }
        Ok(())
    }

    pub(crate) fn check_area(&self, row: usize, col: usize, w: usize, h: usize) -> Result<()> {
        if w == 0 || h == 0 {
            return Err(Error::invalid_argument(format!(
                "area dimensions must be positive, got {w}x{h}"
            )));
        }
        let row_end = row
            .checked_add(h)
            .ok_or_else(|| Error::invalid_argument("area rows overflow usize"))?;
        if row_end > self.height {
            return Err(Error::out_of_range(row_end - 1, self.height));
        }
        let col_end = col
            .checked_add(w)
            .ok_or_else(|| Error::invalid_argument("area columns overflow usize"))?;
        if col_end > self.width {
            return Err(Error::out_of_range(col_end - 1, self.width));
        }
        Ok(())
    }
}
