//! Text form of a grid: `width,height|row|row|...`, each row its 32-bit
//! words in decimal separated by commas.

use super::BitGrid;
use crate::error::{Error, Result};
use crate::models::BitVector;
use std::fmt::{self, Write};
use std::str::FromStr;

impl BitGrid {
    /// Encode as `width,height|w0,w1|...`.
    pub fn to_text(&self) -> String {
        let mut out = format!("{},{}", self.width, self.height);
        for row in &self.rows {
            out.push('|');
            for (i, word) in row.to_u32_words().iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Writing into a String cannot fail.
                let _ = write!(out, "{word}");
            }
        }
        out
    }

    /// Decode the output of [`BitGrid::to_text`].
    pub fn from_text(text: &str) -> Result<BitGrid> {
        let parsed = parse_text(text.trim());
        if let Err(err) = &parsed {
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!("GRID: rejected text encoding: {err}");
            }
        }
        parsed
    }

    /// Draw the grid one line per row, `set` for set cells.
    pub fn render_ascii(&self, set: char, clear: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            out.extend(row.iter().map(|bit| if bit { set } else { clear }));
            out.push('\n');
        }
        out
    }
}

fn parse_text(text: &str) -> Result<BitGrid> {
    let (header, body) = text
        .split_once('|')
        .ok_or_else(|| Error::invalid_argument("grid text has no rows"))?;
    let (width, height) = header
        .split_once(',')
        .ok_or_else(|| Error::invalid_argument(format!("bad grid header {header:?}")))?;
    let width = parse_dimension(width)?;
    let height = parse_dimension(height)?;
    let words_per_row = width.div_ceil(32);

    let sections: Vec<&str> = body.split('|').collect();
    if sections.len() != height {
        return Err(Error::invalid_argument(format!(
            "grid text has {} rows, header says {height}",
            sections.len()
        )));
    }

    let mut rows = Vec::with_capacity(height);
    for (r, section) in sections.iter().enumerate() {
        let words = section
            .split(',')
            .map(parse_digits::<u32>)
            .collect::<Result<Vec<u32>>>()
            .map_err(|err| Error::invalid_argument(format!("row {r}: {err}")))?;
        if words.len() != words_per_row {
            return Err(Error::invalid_argument(format!(
                "row {r} has {} words, expected {words_per_row}",
                words.len()
            )));
        }
        let mut row = BitVector::from_u32_words(&words)?;
        if row.len() - row.leading_zero_count() > width {
            return Err(Error::invalid_argument(format!(
                "row {r} has bits set beyond width {width}"
            )));
        }
        row.set_length(width);
        rows.push(row);
    }
    BitGrid::from_rows(rows)
}

fn parse_dimension(value: &str) -> Result<usize> {
    match parse_digits::<usize>(value) {
        Ok(0) | Err(_) => Err(Error::invalid_argument(format!(
            "grid dimension {value:?} is not a positive integer"
        ))),
        Ok(v) => Ok(v),
    }
}

/// Plain decimal: ASCII digits only, no sign or padding.
fn parse_digits<T: FromStr>(value: &str) -> Result<T> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_argument(format!("{value:?} is not a decimal number")));
    }
    value
        .parse()
        .map_err(|_| Error::invalid_argument(format!("{value:?} is out of range")))
}

impl fmt::Display for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for BitGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_grid() {
        let mut grid = BitGrid::new(3, 2).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(0, 2, true).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.to_text(), "3,2|5|2");
        assert_eq!(grid.to_string().parse::<BitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_wide_rows_use_several_words() {
        let mut grid = BitGrid::new(40, 1).unwrap();
        grid.set(0, 39, true).unwrap();
        assert_eq!(grid.to_text(), "40,1|0,128");
        assert_eq!(BitGrid::from_text("40,1|0,128").unwrap(), grid);
        assert_eq!(BitGrid::from_text("40,1|0,128\n").unwrap(), grid);
    }

    #[test]
    fn test_rejects_malformed_text() {
        for bad in [
            "",
            "3,2",
            "3|5|2",
            "0,1|0",
            "3,2|5",
            "3,1|5,0",
            "3,1|8",
            "3,1|x",
            " 3 , 1 | +5 ",
            "3,1|+5",
            "3, 1|5",
            "3,1| 5",
            "3,1|5,",
            "3,1|4294967296",
        ] {
            assert!(
                matches!(BitGrid::from_text(bad), Err(Error::InvalidArgument(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_render_ascii() {
        let grid = BitGrid::checkerboard(3, 2, true).unwrap();
        assert_eq!(grid.render_ascii('#', '.'), "#.#\n.#.\n");
    }
}
