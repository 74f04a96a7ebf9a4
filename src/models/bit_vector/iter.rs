//! Bit iteration.
//!
//! [`Bits`] borrows the vector, so it cannot outlive a mutation. [`BitCursor`]
//! is detached: it stores only a position and the version it started from,
//! and refuses to continue once the vector has changed.

use super::BitVector;
use crate::error::{Error, Result};
use std::iter::FusedIterator;
use std::ops::Range;

/// Borrowing iterator over the bits of a [`BitVector`], index 0 first.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    vector: &'a BitVector,
    range: Range<usize>,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.range.next().map(|i| self.vector.bit(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Bits<'_> {
    fn next_back(&mut self) -> Option<bool> {
        self.range.next_back().map(|i| self.vector.bit(i))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

/// Direction of a [`BitCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 0 up to `len - 1`
    Ascending,
    /// Bit `len - 1` down to 0
    Descending,
}

/// Position into a vector that survives without borrowing it.
///
/// A cursor belongs to the vector that created it. It records that vector's
/// version and length and rejects any vector that no longer matches both;
/// another vector with the same length and version cannot be told apart.
#[derive(Debug, Clone)]
pub struct BitCursor {
    order: BitOrder,
    version: u64,
    length: usize,
    consumed: usize,
}

impl BitCursor {
    /// Next bit, `Ok(None)` past the end, or `InvalidOperation` if `vector`
    /// changed since the cursor was created or last reset.
    pub fn next_bit(&mut self, vector: &BitVector) -> Result<Option<bool>> {
        if vector.version != self.version {
            return Err(Error::invalid_operation(
                "bit vector was modified during iteration",
            ));
        }
        if vector.length != self.length {
            return Err(Error::invalid_operation(format!(
                "cursor over {} bits given a vector of {}",
                self.length, vector.length
            )));
        }
        if self.consumed >= vector.length {
            return Ok(None);
        }
        let index = match self.order {
            BitOrder::Ascending => self.consumed,
            BitOrder::Descending => vector.length - 1 - self.consumed,
        };
        self.consumed += 1;
        Ok(Some(vector.bit(index)))
    }

    /// Start over from the first bit against the vector's current state.
    pub fn reset(&mut self, vector: &BitVector) {
        self.version = vector.version;
        self.length = vector.length;
        self.consumed = 0;
    }

    /// Bits yielded so far.
    pub fn position(&self) -> usize {
        self.consumed
    }
}

impl BitVector {
    /// Iterate bits from index 0; `.rev()` walks from the top.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            vector: self,
            range: 0..self.length,
        }
    }

    /// Detached cursor pinned to the current version.
    pub fn cursor(&self, order: BitOrder) -> BitCursor {
        BitCursor {
            order,
            version: self.version,
            length: self.length,
            consumed: 0,
        }
    }
}
