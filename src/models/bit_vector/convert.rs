//! Snapshot conversions to fixed-width integer and bool arrays.

use super::{BitVector, MAX_SOURCE_WORDS, check_source_len};
use crate::error::Result;
use crate::utils::words::{WORD_BITS, low_mask};

/// Largest slice accepted by [`BitVector::from_u32_words`].
pub(crate) const MAX_U32_SOURCE_WORDS: usize = MAX_SOURCE_WORDS * 2;

impl BitVector {
    /// Pack 32-bit values little-endian; length is `32 * values.len()`.
    pub fn from_u32_words(values: &[u32]) -> Result<Self> {
        check_source_len("u32", values.len(), MAX_U32_SOURCE_WORDS)?;
        let words = values
            .chunks(2)
            .map(|pair| pair[0] as u64 | pair.get(1).map_or(0, |&hi| (hi as u64) << 32))
            .collect();
        Ok(Self {
            length: values.len() * 32,
            words,
            version: 0,
        })
    }

    /// Copy of the backing words.
    pub fn to_u64_words(&self) -> Vec<u64> {
        self.words.clone()
    }

    /// Little-endian 32-bit chunks, final chunk zero-padded.
    pub fn to_u32_words(&self) -> Vec<u32> {
        self.chunks(32).map(|c| c as u32).collect()
    }

    /// Little-endian 16-bit chunks, final chunk zero-padded.
    pub fn to_u16_words(&self) -> Vec<u16> {
        self.chunks(16).map(|c| c as u16).collect()
    }

    /// Little-endian bytes, final byte zero-padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.chunks(8).map(|c| c as u8).collect()
    }

    /// One bool per logical bit.
    pub fn to_bool_array(&self) -> Vec<bool> {
        self.iter().collect()
    }

    // `width` divides 64, so no chunk straddles two words.
    fn chunks(&self, width: usize) -> impl Iterator<Item = u64> + '_ {
        let count = self.length.div_ceil(width);
        let mask = low_mask(width);
        (0..count).map(move |j| {
            let bit = j * width;
            (self.words[bit / WORD_BITS] >> (bit % WORD_BITS)) & mask
        })
    }
}
