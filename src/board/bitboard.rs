//! Bitboard implementation for fast line matching

use super::TOTAL_CELLS;

/// Mask with one bit per cell
const FULL: u16 = (1 << TOTAL_CELLS) - 1;

/// One bit per cell, bit `i` is cell index `i`.
/// Nine cells fit in the low bits of a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a bitboard from raw bits (bits above the board are dropped)
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits: bits & FULL }
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Set a bit at index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits |= 1u16 << idx;
    }

    /// Clear a bit at index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits &= !(1u16 << idx);
    }

    /// Check if bit is set at index
    #[inline]
    pub fn get(self, idx: usize) -> bool {
        idx < TOTAL_CELLS && (self.bits >> idx) & 1 == 1
    }

    /// True if every bit of `mask` is set here
    #[inline]
    pub fn contains(self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    /// Cells not set here
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard {
            bits: !self.bits & FULL,
        }
    }

    /// Iterate over set bit indices in ascending order
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
