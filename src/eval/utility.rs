//! Terminal board scoring

use crate::board::{Board, Player};
use crate::rules::{is_terminal, winning_mark};

use super::Utility;

/// Score a terminal board from `me`'s perspective.
///
/// Returns [`Utility::WIN`] if `me` holds a line, [`Utility::LOSS`] if `opp`
/// does, [`Utility::DRAW`] otherwise.
///
/// The board must be terminal. Debug builds assert this; release builds
/// score an unfinished board as a draw.
pub fn evaluate(board: &Board, me: Player, opp: Player) -> i32 {
    debug_assert!(is_terminal(board), "evaluate called on unfinished board {board}");
    match winning_mark(board) {
        Some(winner) if winner == me => Utility::WIN,
        Some(winner) if winner == opp => Utility::LOSS,
        _ => Utility::DRAW,
    }
}
