//! Game rules for 3x3 tic-tac-toe
//!
//! This module derives facts from a board:
//! - Legal moves (empty cells, ascending)
//! - Win conditions (three in a row on one of the 8 lines)
//! - Terminal detection (a winner, or a full board)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{legal_moves, side_to_move};
pub use win::{is_terminal, winning_line, winning_mark, LINES};
