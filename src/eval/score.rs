//! Utility values for terminal positions

/// Scores seen by the searching side
pub struct Utility;

impl Utility {
    /// Searching side has three in a row
    pub const WIN: i32 = 1;
    /// Full board, nobody won
    pub const DRAW: i32 = 0;
    /// Opponent has three in a row
    pub const LOSS: i32 = -1;

    // Search sentinels, strictly outside [LOSS, WIN] so the first real
    // value always replaces them.
    /// Start value at maximizing nodes and initial alpha
    pub const NEG_INF: i32 = Self::LOSS - 1;
    /// Start value at minimizing nodes and initial beta
    pub const POS_INF: i32 = Self::WIN + 1;
}
