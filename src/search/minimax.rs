//! Plain minimax over the full game tree
//!
//! Every reachable position below the root is visited. Maximizing nodes are
//! the searching side's turns, minimizing nodes the opponent's.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player};
//! use tictactoe::search::MinimaxSearcher;
//!
//! let board: Board = "XX.|OO.|...".parse().unwrap();
//! let mut searcher = MinimaxSearcher::new();
//!
//! let result = searcher.search(&board, Player::X, Player::X, Player::O);
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(result.value, 1);
//! ```

use crate::board::{Board, Player};
use crate::eval::{evaluate, Utility};
use crate::rules::{is_terminal, legal_moves};

use super::SearchResult;

/// Exhaustive minimax searcher.
///
/// Owns the node counter for one search at a time; `search` resets it.
#[derive(Debug, Default)]
pub struct MinimaxSearcher {
    nodes: u64,
}

impl MinimaxSearcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` with `to_move` about to play.
    ///
    /// `me` is the side values are reported for, `opp` the other side.
    /// The board itself is never modified.
    #[must_use]
    pub fn search(&mut self, board: &Board, to_move: Player, me: Player, opp: Player) -> SearchResult {
        self.nodes = 0;
        let (value, best_move) = self.minimax(board, to_move, me, opp);
        SearchResult {
            value,
            best_move,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, board: &Board, player: Player, me: Player, opp: Player) -> (i32, Option<usize>) {
        self.nodes += 1;

        if is_terminal(board) {
            return (evaluate(board, me, opp), None);
        }

        let maximizing = player == me;
        let next_player = if maximizing { opp } else { me };
        let mut best_value = if maximizing { Utility::NEG_INF } else { Utility::POS_INF };
        let mut best_move = None;

        for mv in legal_moves(board) {
            let child = board.with_move(mv, player);
            let (value, _) = self.minimax(&child, next_player, me, opp);

            // Strict comparison: the lowest index reaching the best value wins ties
            let better = if maximizing { value > best_value } else { value < best_value };
            if better {
                best_value = value;
                best_move = Some(mv);
            }
        }

        (best_value, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_draw() {
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.search(&Board::new(), Player::O, Player::O, Player::X);
        assert_eq!(result.value, Utility::DRAW);
        // Every opening draws, so the first one is kept
        assert_eq!(result.best_move, Some(0));
    }

    #[test]
    fn test_empty_board_visits_whole_tree() {
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.search(&Board::new(), Player::X, Player::X, Player::O);
        assert_eq!(result.nodes, 549_946);
        assert_eq!(searcher.nodes(), 549_946);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX.|OO.|...".parse().unwrap();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.search(&board, Player::X, Player::X, Player::O);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.value, Utility::WIN);
    }

    #[test]
    fn test_o_to_move_picks_index_two() {
        // O at 2 blocks X's row and sets up the 2-4-6 diagonal with 3-4-5 still open
        let board: Board = "XX.|OO.|...".parse().unwrap();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.search(&board, Player::O, Player::O, Player::X);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.value, Utility::WIN);
    }

    #[test]
    fn test_must_block() {
        // X threatens 0-1-2; O has nothing better than blocking at 2
        let board: Board = "XX.|.O.|...".parse().unwrap();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.search(&board, Player::O, Player::O, Player::X);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        let mut searcher = MinimaxSearcher::new();
        let result = searcher.search(&board, Player::O, Player::O, Player::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, Utility::LOSS);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_board_is_not_mutated() {
        let board: Board = "X..|.O.|...".parse().unwrap();
        let before = board;
        let mut searcher = MinimaxSearcher::new();
        let _ = searcher.search(&board, Player::X, Player::X, Player::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_counter_resets_between_searches() {
        let board: Board = "XOX|OX.|...".parse().unwrap();
        let mut searcher = MinimaxSearcher::new();
        let first = searcher.search(&board, Player::O, Player::O, Player::X);
        let second = searcher.search(&board, Player::O, Player::O, Player::X);
        assert_eq!(first, second);
    }
}
