use std::collections::HashSet;

use tictactoe::rules::{is_terminal, legal_moves};
use tictactoe::{Board, Player};

/// Every non-terminal board reachable from the empty board, paired with the
/// side to move, for games started by either mark.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for first in [Player::X, Player::O] {
        collect(Board::new(), first, &mut seen, &mut out);
    }
    out
}

fn collect(board: Board, to_move: Player, seen: &mut HashSet<(Board, Player)>, out: &mut Vec<(Board, Player)>) {
    if is_terminal(&board) || !seen.insert((board, to_move)) {
        return;
    }
    out.push((board, to_move));
    for mv in legal_moves(&board) {
        collect(board.with_move(mv, to_move), to_move.opponent(), seen, out);
    }
}
