//! Resizable bit vector packed into 64-bit words.
//!
//! Bit `i` lives in `words[i / 64]` at position `i % 64`, least significant
//! first. Bits of the last word at or beyond `length` are always zero after
//! every public operation; population and zero counts rely on it.

mod analysis;
mod convert;
mod format;
mod iter;
mod shift;

pub use format::BitFormat;
pub use iter::{BitCursor, BitOrder, Bits};

use crate::error::{Error, Result};
use crate::utils::words::{WORD_BITS, low_mask, shift_words_right, tail_mask, word_count};
use rand::Rng;
use std::hash::{Hash, Hasher};
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign};
use std::str::FromStr;

/// Largest byte slice accepted by [`BitVector::from_bytes`].
pub const MAX_SOURCE_BYTES: usize = 0xFFF_FFFF;
/// Largest word slice accepted by [`BitVector::from_words`].
pub const MAX_SOURCE_WORDS: usize = 0x3FF_FFFF;

/// Growable sequence of bits.
#[derive(Debug, Clone, Default)]
pub struct BitVector {
    length: usize,
    words: Vec<u64>,
    version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogicOp {
    And,
    Or,
    Xor,
}

impl LogicOp {
    #[inline]
    fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            LogicOp::And => a & b,
            LogicOp::Or => a | b,
            LogicOp::Xor => a ^ b,
        }
    }
}

impl BitVector {
    /// Create a vector of `length` bits, all equal to `fill`.
    pub fn new(length: usize, fill: bool) -> Self {
        let word = if fill { u64::MAX } else { 0 };
        let mut vector = Self {
            length,
            words: vec![word; word_count(length)],
            version: 0,
        };
        vector.mask_tail();
        vector
    }

    /// All-zero vector.
    pub fn zeros(length: usize) -> Self {
        Self::new(length, false)
    }

    /// All-one vector.
    pub fn ones(length: usize) -> Self {
        Self::new(length, true)
    }

    /// One bit per entry of `values`.
    pub fn from_bools(values: &[bool]) -> Self {
        let mut vector = Self::zeros(values.len());
        for (i, &value) in values.iter().enumerate() {
            if value {
                vector.words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
            }
        }
        vector
    }

    /// Pack bytes little-endian: byte 0 fills bits 0-7 of word 0.
    pub fn from_bytes(values: &[u8]) -> Result<Self> {
        check_source_len("byte", values.len(), MAX_SOURCE_BYTES)?;
        let words = values
            .chunks(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(buf)
            })
            .collect();
        Ok(Self {
            length: values.len() * 8,
            words,
            version: 0,
        })
    }

    /// Copy words verbatim; length is `64 * values.len()`.
    pub fn from_words(values: &[u64]) -> Result<Self> {
        check_source_len("word", values.len(), MAX_SOURCE_WORDS)?;
        Ok(Self {
            length: values.len() * WORD_BITS,
            words: values.to_vec(),
            version: 0,
        })
    }

    /// Parse a string of `'0'`/`'1'`, most significant bit first.
    ///
    /// The last character becomes bit 0, so the binary rendering of the
    /// result reads back as the input.
    pub fn from_bit_string(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_argument("empty bit string"));
        }
        let length = s.len();
        let mut vector = Self::zeros(length);
        for (pos, byte) in s.bytes().enumerate() {
            let index = length - 1 - pos;
            match byte {
                b'0' => {}
                b'1' => vector.words[index / WORD_BITS] |= 1 << (index % WORD_BITS),
                other => {
                    return Err(Error::invalid_argument(format!(
                        "unexpected character {:?} at position {pos} in bit string",
                        other as char
                    )));
                }
            }
        }
        Ok(vector)
    }

    /// Random bits from the thread-local generator.
    pub fn random(length: usize) -> Self {
        Self::random_with(length, &mut rand::thread_rng())
    }

    /// Random bits from a caller-supplied generator.
    pub fn random_with<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let mut vector = Self::zeros(length);
        vector.fill_random(rng);
        vector
    }

    /// Logical number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// True when the vector holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Mutation counter; changes whenever the vector changes.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Backing words, tail bits zeroed.
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Grow or shrink to `new_length`; new bits are zero.
    pub fn set_length(&mut self, new_length: usize) {
        if new_length == self.length {
            return;
        }
        self.words.resize(word_count(new_length), 0);
        self.length = new_length;
        if new_length % WORD_BITS != 0 {
            self.mask_tail();
        }
        self.touch();
    }

    /// Read bit `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// Write bit `index`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.put(index, value);
        self.touch();
        Ok(())
    }

    /// Flip bit `index`.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.words[index / WORD_BITS] ^= 1 << (index % WORD_BITS);
        self.touch();
        Ok(())
    }

    /// Set (`Some(true)`), clear (`Some(false)`) or toggle (`None`) the bits
    /// `start..start + count`.
    pub fn set_range(&mut self, start: usize, count: usize, state: Option<bool>) -> Result<()> {
        let end = start
            .checked_add(count)
            .ok_or_else(|| Error::invalid_argument("bit range overflows usize"))?;
        if end > self.length {
            return Err(Error::out_of_range(end - 1, self.length));
        }
        self.apply_range(start, end, state);
        self.touch();
        Ok(())
    }

    /// Every bit becomes `value`.
    pub fn set_all(&mut self, value: bool) {
        self.words.fill(if value { u64::MAX } else { 0 });
        self.mask_tail();
        self.touch();
    }

    /// Mirror the vector: bit `i` swaps with bit `len - 1 - i`.
    pub fn reverse(&mut self) {
        if self.length < 2 {
            return;
        }
        self.words.reverse();
        for word in &mut self.words {
            *word = word.reverse_bits();
        }
        let padding = self.words.len() * WORD_BITS - self.length;
        if padding != 0 {
            shift_words_right(&mut self.words, padding);
        }
        self.touch();
    }

    /// Re-roll every bit from the thread-local generator.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Re-roll every bit from a caller-supplied generator.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_random(rng);
        self.touch();
    }

    /// Complement every bit.
    pub fn not(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.mask_tail();
        self.touch();
    }

    /// `self &= other`; lengths must match.
    pub fn and(&mut self, other: &BitVector) -> Result<()> {
        self.combine(other, LogicOp::And)
    }

    /// `self |= other`; lengths must match.
    pub fn or(&mut self, other: &BitVector) -> Result<()> {
        self.combine(other, LogicOp::Or)
    }

    /// `self ^= other`; lengths must match.
    pub fn xor(&mut self, other: &BitVector) -> Result<()> {
        self.combine(other, LogicOp::Xor)
    }

    fn combine(&mut self, other: &BitVector, op: LogicOp) -> Result<()> {
        if self.length != other.length {
            return Err(Error::invalid_argument(format!(
                "length mismatch: {} vs {}",
                self.length, other.length
            )));
        }
        self.combine_words(other, op);
        Ok(())
    }

    /// Word-wise combination; caller guarantees equal lengths.
    pub(crate) fn combine_words(&mut self, other: &BitVector, op: LogicOp) {
        debug_assert_eq!(self.length, other.length);
        for (dst, &src) in self.words.iter_mut().zip(&other.words) {
            *dst = op.apply(*dst, src);
        }
        self.touch();
    }

    /// Copy `count` bits from `src[src_start..]` into `self[dst_start..]`.
    /// Caller validates both ranges.
    pub(crate) fn copy_bits(&mut self, dst_start: usize, src: &BitVector, src_start: usize, count: usize) {
        debug_assert!(dst_start + count <= self.length);
        debug_assert!(src_start + count <= src.length);
        for i in 0..count {
            self.put(dst_start + i, src.bit(src_start + i));
        }
        self.touch();
    }

    /// Range fill without bounds checks or version bump.
    pub(crate) fn apply_range(&mut self, start: usize, end: usize, state: Option<bool>) {
        let mut i = start;
        while i < end {
            let offset = i % WORD_BITS;
            let take = (WORD_BITS - offset).min(end - i);
            let mask = low_mask(take) << offset;
            let word = &mut self.words[i / WORD_BITS];
            match state {
                Some(true) => *word |= mask,
                Some(false) => *word &= !mask,
                None => *word ^= mask,
            }
            i += take;
        }
    }

    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    #[inline]
    fn put(&mut self, index: usize, value: bool) {
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.length {
            let value = rng.gen_bool(0.5);
            self.put(i, value);
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.length {
            return Err(Error::out_of_range(index, self.length));
        }
        Ok(())
    }

    #[inline]
    fn mask_tail(&mut self) {
        let mask = tail_mask(self.length);
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }

    #[inline]
    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

/// Reject source slices longer than `limit` elements.
pub(crate) fn check_source_len(kind: &str, len: usize, limit: usize) -> Result<()> {
    if len > limit {
        return Err(Error::invalid_argument(format!(
            "{kind} source of {len} exceeds {limit}"
        )));
    }
    Ok(())
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.words == other.words
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.words.hash(state);
    }
}

impl FromStr for BitVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bit_string(s)
    }
}

impl From<&[bool]> for BitVector {
    fn from(values: &[bool]) -> Self {
        Self::from_bools(values)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let values: Vec<bool> = iter.into_iter().collect();
        Self::from_bools(&values)
    }
}

// Operator forms panic on length mismatch, like slice indexing does.

impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, rhs: &BitVector) {
        assert_eq!(self.length, rhs.length, "bit vector length mismatch");
        self.combine_words(rhs, LogicOp::And);
    }
}

impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, rhs: &BitVector) {
        assert_eq!(self.length, rhs.length, "bit vector length mismatch");
        self.combine_words(rhs, LogicOp::Or);
    }
}

impl BitXorAssign<&BitVector> for BitVector {
    fn bitxor_assign(&mut self, rhs: &BitVector) {
        assert_eq!(self.length, rhs.length, "bit vector length mismatch");
        self.combine_words(rhs, LogicOp::Xor);
    }
}
