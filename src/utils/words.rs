//! Word-level helpers for packed 64-bit bit storage.
//!
//! Everything here works on raw `u64` slices and knows nothing about logical
//! lengths; callers re-mask the tail themselves.

/// Bits per storage word.
pub const WORD_BITS: usize = 64;

const M1: u64 = 0x5555_5555_5555_5555;
const M2: u64 = 0x3333_3333_3333_3333;
const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
const H01: u64 = 0x0101_0101_0101_0101;

/// Number of words needed to hold `bits` bits.
#[inline]
pub fn word_count(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask of the `n` least significant bits (`n` in `0..=64`).
#[inline]
pub fn low_mask(n: usize) -> u64 {
    if n >= WORD_BITS { u64::MAX } else { (1u64 << n) - 1 }
}

/// Mask of the valid bits in the last word of a `length`-bit vector.
#[inline]
pub fn tail_mask(length: usize) -> u64 {
    match length % WORD_BITS {
        0 => u64::MAX,
        r => low_mask(r),
    }
}

/// SWAR popcount of one word.
///
/// Pairwise 2-bit sums, then 4-bit sums, then a multiply folds the byte
/// counts into the top byte.
#[inline]
pub fn popcount_word(word: u64) -> u32 {
    let mut x = word;
    x -= (x >> 1) & M1;
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 56) as u32
}

/// Popcount over a word slice.
#[inline]
pub fn popcount_words(words: &[u64]) -> usize {
    words.iter().map(|&w| popcount_word(w) as usize).sum()
}

/// Shift the whole slice toward higher bit indices, dropping bits that fall
/// off the top of the last word and filling the bottom with zeros.
pub fn shift_words_left(words: &mut [u64], amount: usize) {
    let n = words.len();
    let major = amount / WORD_BITS;
    let minor = amount % WORD_BITS;
    if major >= n {
        words.fill(0);
        return;
    }
    for i in (0..n).rev() {
        let mut w = 0;
        if i >= major {
            w = words[i - major] << minor;
            if minor != 0 && i > major {
                w |= words[i - major - 1] >> (WORD_BITS - minor);
            }
        }
        words[i] = w;
    }
}

/// Shift the whole slice toward lower bit indices, filling the top with zeros.
pub fn shift_words_right(words: &mut [u64], amount: usize) {
    let n = words.len();
    let major = amount / WORD_BITS;
    let minor = amount % WORD_BITS;
    if major >= n {
        words.fill(0);
        return;
    }
    for i in 0..n {
        let src = i + major;
        let mut w = 0;
        if src < n {
            w = words[src] >> minor;
            if minor != 0 && src + 1 < n {
                w |= words[src + 1] << (WORD_BITS - minor);
            }
        }
        words[i] = w;
    }
}
