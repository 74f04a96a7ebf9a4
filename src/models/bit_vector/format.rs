//! Text rendering, most significant bit first.

use super::BitVector;
use crate::error::{Error, Result};
use crate::utils::words::WORD_BITS;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Rendering selected by a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitFormat {
    /// `0b` followed by one digit per bit (`"B"`, `"G"` or empty)
    Binary,
    /// `0x` followed by upper-case hex digits (`"X"`)
    Hex,
}

impl FromStr for BitFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "B" | "b" | "G" | "g" => Ok(BitFormat::Binary),
            "X" | "x" => Ok(BitFormat::Hex),
            "D" | "d" => Err(Error::Unimplemented("decimal rendering of bit vectors")),
            other => Err(Error::invalid_argument(format!("unknown bit format {other:?}"))),
        }
    }
}

impl BitVector {
    /// Render using a format string (`"B"`, `"G"`, `"X"`).
    pub fn to_formatted(&self, format: &str) -> Result<String> {
        Ok(self.render(format.parse()?))
    }

    /// Render in the given format.
    pub fn render(&self, format: BitFormat) -> String {
        match format {
            BitFormat::Binary => self.render_binary(),
            BitFormat::Hex => self.render_hex(),
        }
    }

    fn render_binary(&self) -> String {
        let mut out = String::with_capacity(self.length + 2);
        out.push_str("0b");
        for i in (0..self.length).rev() {
            out.push(if self.bit(i) { '1' } else { '0' });
        }
        out
    }

    fn render_hex(&self) -> String {
        let mut out = String::with_capacity(self.words.len() * 16 + 2);
        out.push_str("0x");
        let Some((&top, rest)) = self.words.split_last() else {
            return out;
        };
        let top_bits = self.length - rest.len() * WORD_BITS;
        let digits = top_bits.div_ceil(4);
        // Writing into a String cannot fail.
        let _ = write!(out, "{top:0digits$X}");
        for word in rest.iter().rev() {
            let _ = write!(out, "{word:016X}");
        }
        out
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_binary())
    }
}
