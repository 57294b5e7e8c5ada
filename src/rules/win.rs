//! Win condition checking
//!
//! A side wins with three of its marks on one of the 8 lines:
//! 3 rows, 3 columns, 2 diagonals.

use crate::board::{Bitboard, Board, Player};

/// Winning lines as cell index triples, checked in this order
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// `LINES` as bitboard masks
const LINE_MASKS: [Bitboard; 8] = {
    let mut masks = [Bitboard::new(); 8];
    let mut i = 0;
    while i < LINES.len() {
        let [a, b, c] = LINES[i];
        masks[i] = Bitboard::from_bits((1 << a) | (1 << b) | (1 << c));
        i += 1;
    }
    masks
};

/// First line (in `LINES` order) fully held by one mark, with that mark
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    for (line, mask) in LINES.iter().zip(LINE_MASKS) {
        for player in [Player::X, Player::O] {
            if board.stones(player).contains(mask) {
                return Some((player, *line));
            }
        }
    }
    None
}

/// Mark holding three in a row, if any
#[inline]
pub fn winning_mark(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// True if someone has won or no legal move is left
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    winning_mark(board).is_some() || board.empty_cells().is_empty()
}
