//! Search module for the tic-tac-toe AI
//!
//! Contains two interchangeable exhaustive searches:
//! - Minimax: plain full tree enumeration
//! - Alpha-Beta: the same search, skipping subtrees that cannot change the result
//!
//! Both return the same value and move for every board. Alpha-beta only
//! visits fewer nodes.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::AlphaBetaSearcher;
pub use minimax::MinimaxSearcher;

/// Search result: game-theoretic value and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// -1, 0 or +1 from the searching side's perspective
    pub value: i32,
    /// Best move found, `None` only at terminal boards
    pub best_move: Option<usize>,
    /// Nodes visited by this search, root included
    pub nodes: u64,
}
