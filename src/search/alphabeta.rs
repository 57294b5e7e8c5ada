//! Minimax with alpha-beta pruning
//!
//! Same tree walk as [`MinimaxSearcher`](super::MinimaxSearcher), carrying two
//! bounds down the recursion:
//!
//! - `alpha`: value the maximizing side can already guarantee on this path
//! - `beta`: value the minimizing side can already guarantee on this path
//!
//! Once `alpha >= beta` the remaining siblings cannot change the result and
//! are skipped. The returned value and move are identical to plain minimax,
//! including the lowest-index tie-break.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player};
//! use tictactoe::search::{AlphaBetaSearcher, MinimaxSearcher};
//!
//! let board = Board::new();
//! let pruned = AlphaBetaSearcher::new().search(&board, Player::X, Player::X, Player::O);
//! let full = MinimaxSearcher::new().search(&board, Player::X, Player::X, Player::O);
//!
//! assert_eq!((pruned.value, pruned.best_move), (full.value, full.best_move));
//! assert!(pruned.nodes < full.nodes);
//! ```

use crate::board::{Board, Player};
use crate::eval::{evaluate, Utility};
use crate::rules::{is_terminal, legal_moves};

use super::SearchResult;

/// Alpha-beta searcher.
///
/// Keeps its own node counter, independent of any other searcher.
#[derive(Debug, Default)]
pub struct AlphaBetaSearcher {
    nodes: u64,
}

impl AlphaBetaSearcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search with the full window (`Utility::NEG_INF`, `Utility::POS_INF`).
    #[must_use]
    pub fn search(&mut self, board: &Board, to_move: Player, me: Player, opp: Player) -> SearchResult {
        self.search_window(board, to_move, me, opp, Utility::NEG_INF, Utility::POS_INF)
    }

    /// Search with an explicit `(alpha, beta)` window.
    ///
    /// With a window narrower than the full one, a value outside it is only
    /// a bound on the true value.
    #[must_use]
    pub fn search_window(
        &mut self,
        board: &Board,
        to_move: Player,
        me: Player,
        opp: Player,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        self.nodes = 0;
        let (value, best_move) = self.alphabeta(board, to_move, alpha, beta, me, opp);
        SearchResult {
            value,
            best_move,
            nodes: self.nodes,
        }
    }

    fn alphabeta(
        &mut self,
        board: &Board,
        player: Player,
        mut alpha: i32,
        mut beta: i32,
        me: Player,
        opp: Player,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;

        if is_terminal(board) {
            return (evaluate(board, me, opp), None);
        }

        let mut best_move = None;

        if player == me {
            // MAX node
            let mut best_value = Utility::NEG_INF;
            for mv in legal_moves(board) {
                let child = board.with_move(mv, player);
                let (value, _) = self.alphabeta(&child, opp, alpha, beta, me, opp);
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            (best_value, best_move)
        } else {
            // MIN node
            let mut best_value = Utility::POS_INF;
            for mv in legal_moves(board) {
                let child = board.with_move(mv, player);
                let (value, _) = self.alphabeta(&child, me, alpha, beta, me, opp);
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (best_value, best_move)
        }
    }
}
