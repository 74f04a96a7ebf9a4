use super::BitVector;
use crate::utils::words::{WORD_BITS, popcount_words};

impl BitVector {
    /// Number of set bits.
    pub fn population_count(&self) -> usize {
        popcount_words(&self.words)
    }

    /// True when no bit is set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Zero bits counted downward from index `len - 1`; `len` when all zero.
    pub fn leading_zero_count(&self) -> usize {
        let Some((&top, rest)) = self.words.split_last() else {
            return 0;
        };
        let top_bits = self.length - rest.len() * WORD_BITS;
        if top != 0 {
            let highest = WORD_BITS - 1 - top.leading_zeros() as usize;
            return top_bits - 1 - highest;
        }
        let mut count = top_bits;
        for &word in rest.iter().rev() {
            if word != 0 {
                return count + word.leading_zeros() as usize;
            }
            count += WORD_BITS;
        }
        count
    }

    /// Zero bits counted upward from index 0; `len` when all zero.
    pub fn trailing_zero_count(&self) -> usize {
        self.words
            .iter()
            .position(|&w| w != 0)
            .map(|i| i * WORD_BITS + self.words[i].trailing_zeros() as usize)
            .unwrap_or(self.length)
    }
}
