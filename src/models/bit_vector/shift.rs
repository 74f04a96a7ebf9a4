//! Logical shifts, rotations and zero trimming.

use super::BitVector;
use crate::utils::words::{WORD_BITS, low_mask, shift_words_left, shift_words_right, tail_mask};

impl BitVector {
    /// Move every bit `amount` places toward higher indices; bits pushed past
    /// the end are lost and the bottom fills with zeros.
    pub fn shift_left(&mut self, amount: usize) {
        if amount == 0 {
            return;
        }
        if amount >= self.length {
            self.words.fill(0);
        } else {
            shift_words_left(&mut self.words, amount);
            self.mask_tail();
        }
        self.touch();
    }

    /// Move every bit `amount` places toward lower indices; the top fills
    /// with zeros.
    pub fn shift_right(&mut self, amount: usize) {
        if amount == 0 {
            return;
        }
        if amount >= self.length {
            self.words.fill(0);
        } else {
            shift_words_right(&mut self.words, amount);
        }
        self.touch();
    }

    /// Rotate toward higher indices; bits leaving the top re-enter at bit 0.
    pub fn rotate_left(&mut self, amount: usize) {
        let Some(k) = self.normalize_rotation(amount) else {
            return;
        };
        if k > self.length / 2 {
            self.rotate_right_by(self.length - k);
        } else {
            self.rotate_left_by(k);
        }
        self.touch();
    }

    /// Rotate toward lower indices; bits leaving bit 0 re-enter at the top.
    pub fn rotate_right(&mut self, amount: usize) {
        let Some(k) = self.normalize_rotation(amount) else {
            return;
        };
        if k > self.length / 2 {
            self.rotate_left_by(self.length - k);
        } else {
            self.rotate_right_by(k);
        }
        self.touch();
    }

    /// Drop the zero bits above the highest set bit.
    pub fn trim_leading_zeros(&mut self) {
        let leading = self.leading_zero_count();
        self.set_length(self.length - leading);
    }

    /// Drop the zero bits below the lowest set bit, moving the rest down.
    pub fn trim_trailing_zeros(&mut self) {
        let trailing = self.trailing_zero_count();
        self.shift_right(trailing);
        self.set_length(self.length - trailing);
    }

    /// Drop zero bits from both ends.
    pub fn trim_leading_and_trailing_zeros(&mut self) {
        let trailing = self.trailing_zero_count();
        self.shift_right(trailing);
        let leading = self.leading_zero_count();
        self.set_length(self.length - leading);
    }

    /// Rotation amount modulo the length, or `None` when nothing moves.
    fn normalize_rotation(&self, amount: usize) -> Option<usize> {
        if self.length < 2 {
            return None;
        }
        match amount % self.length {
            0 => None,
            k => Some(k),
        }
    }

    // Both helpers expect 0 < k < length and leave the version alone.

    fn rotate_left_by(&mut self, k: usize) {
        if self.length <= WORD_BITS {
            let mask = low_mask(self.length);
            let word = self.words[0];
            self.words[0] = ((word << k) | (word >> (self.length - k))) & mask;
            return;
        }
        let mut carry = self.words.clone();
        shift_words_right(&mut carry, self.length - k);
        shift_words_left(&mut self.words, k);
        self.mask_tail();
        for (dst, src) in self.words.iter_mut().zip(carry) {
            *dst |= src;
        }
    }

    fn rotate_right_by(&mut self, k: usize) {
        if self.length <= WORD_BITS {
            let mask = low_mask(self.length);
            let word = self.words[0];
            self.words[0] = ((word >> k) | (word << (self.length - k))) & mask;
            return;
        }
        let mut carry = self.words.clone();
        shift_words_left(&mut carry, self.length - k);
        shift_words_right(&mut self.words, k);
        let last = carry.len() - 1;
        carry[last] &= tail_mask(self.length);
        for (dst, src) in self.words.iter_mut().zip(carry) {
            *dst |= src;
        }
    }
}
