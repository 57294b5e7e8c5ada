//! Main AI engine: the entry points the game loops call
//!
//! The engine picks one of the two search variants, checks the call's
//! preconditions, runs the search and reports the chosen cell with its
//! statistics.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Player, SearchType};
//!
//! let mut engine = AIEngine::with_config(SearchType::AlphaBeta);
//! let board: Board = "XX.|OO.|...".parse().unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Player::O, Player::X).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::rules::is_terminal;
use crate::search::{AlphaBetaSearcher, MinimaxSearcher, SearchResult};

/// Which search variant produced (or should produce) a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    /// Exhaustive minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Minimax => write!(f, "Minimax"),
            SearchType::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "exhaustive" => Ok(SearchType::Minimax),
            "alphabeta" | "alpha-beta" | "pruned" => Ok(SearchType::AlphaBeta),
            other => Err(Error::UnknownSearchType {
                name: other.to_string(),
            }),
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell index (0-8)
    pub best_move: usize,
    /// -1, 0 or +1 for the AI under optimal play
    pub value: i32,
    /// Variant that found the move
    pub search_type: SearchType,
    /// Nodes visited
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// AI engine for tic-tac-toe.
///
/// Holds one searcher per variant; each owns its node counter, so a
/// counter only ever reflects the engine's last search with that variant.
#[derive(Debug, Default)]
pub struct AIEngine {
    minimax: MinimaxSearcher,
    alphabeta: AlphaBetaSearcher,
    search_type: SearchType,
}

impl AIEngine {
    /// Engine using alpha-beta search.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchType::AlphaBeta)
    }

    /// Engine using the given search variant.
    #[must_use]
    pub fn with_config(search_type: SearchType) -> Self {
        Self {
            minimax: MinimaxSearcher::new(),
            alphabeta: AlphaBetaSearcher::new(),
            search_type,
        }
    }

    #[must_use]
    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn set_search_type(&mut self, search_type: SearchType) {
        self.search_type = search_type;
    }

    /// Best cell for `ai` to play.
    ///
    /// See [`AIEngine::get_move_with_stats`] for the error cases.
    pub fn get_move(&mut self, board: &Board, ai: Player, human: Player) -> Result<usize> {
        self.get_move_with_stats(board, ai, human).map(|result| result.best_move)
    }

    /// Best cell for `ai` to play, with value, node count and timing.
    ///
    /// # Errors
    ///
    /// - [`Error::SameSide`] if `ai == human`
    /// - [`Error::GameOver`] if `board` is already terminal
    pub fn get_move_with_stats(&mut self, board: &Board, ai: Player, human: Player) -> Result<MoveResult> {
        if ai == human {
            return Err(Error::SameSide);
        }
        if is_terminal(board) {
            return Err(Error::GameOver);
        }

        let start = Instant::now();
        let result: SearchResult = match self.search_type {
            SearchType::Minimax => self.minimax.search(board, ai, ai, human),
            SearchType::AlphaBeta => self.alphabeta.search(board, ai, ai, human),
        };
        let time_ms = start.elapsed().as_millis() as u64;

        // A non-terminal board always has at least one legal move
        let best_move = result.best_move.ok_or(Error::GameOver)?;

        debug!(
            "{} search on {board}: move {best_move}, value {}, {} nodes, {time_ms}ms",
            self.search_type, result.value, result.nodes
        );

        Ok(MoveResult {
            best_move,
            value: result.value,
            search_type: self.search_type,
            nodes: result.nodes,
            time_ms,
        })
    }

    /// Nodes visited by the last search of the given variant.
    #[must_use]
    pub fn nodes(&self, search_type: SearchType) -> u64 {
        match search_type {
            SearchType::Minimax => self.minimax.nodes(),
            SearchType::AlphaBeta => self.alphabeta.nodes(),
        }
    }
}

/// Choose `ai`'s move with exhaustive minimax.
pub fn choose_move_exhaustive(board: &Board, ai: Player, human: Player) -> Result<usize> {
    AIEngine::with_config(SearchType::Minimax).get_move(board, ai, human)
}

/// Choose `ai`'s move with alpha-beta search.
pub fn choose_move_pruned(board: &Board, ai: Player, human: Player) -> Result<usize> {
    AIEngine::with_config(SearchType::AlphaBeta).get_move(board, ai, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.search_type(), SearchType::AlphaBeta);
        assert_eq!(engine.nodes(SearchType::Minimax), 0);
        assert_eq!(engine.nodes(SearchType::AlphaBeta), 0);
    }

    #[test]
    fn test_engine_with_config() {
        let mut engine = AIEngine::with_config(SearchType::Minimax);
        assert_eq!(engine.search_type(), SearchType::Minimax);
        engine.set_search_type(SearchType::AlphaBeta);
        assert_eq!(engine.search_type(), SearchType::AlphaBeta);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board: Board = "XX.|OO.|...".parse().unwrap();
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Player::X, Player::O).unwrap();

        assert_eq!(result.best_move, 2);
        assert_eq!(result.value, 1);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(engine.nodes(SearchType::AlphaBeta), result.nodes);
        assert_eq!(engine.nodes(SearchType::Minimax), 0);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board: Board = "XX.|.O.|...".parse().unwrap();
        assert_eq!(choose_move_exhaustive(&board, Player::O, Player::X).unwrap(), 2);
        assert_eq!(choose_move_pruned(&board, Player::O, Player::X).unwrap(), 2);
    }

    #[test]
    fn test_terminal_board_is_an_error() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert!(matches!(
            choose_move_exhaustive(&board, Player::O, Player::X),
            Err(Error::GameOver)
        ));
        assert!(matches!(
            choose_move_pruned(&board, Player::O, Player::X),
            Err(Error::GameOver)
        ));

        let full: Board = "XOX|XOO|OXX".parse().unwrap();
        assert!(matches!(
            AIEngine::new().get_move(&full, Player::O, Player::X),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_same_side_is_an_error() {
        assert!(matches!(
            AIEngine::new().get_move(&Board::new(), Player::X, Player::X),
            Err(Error::SameSide)
        ));
    }

    #[test]
    fn test_search_type_parsing() {
        assert_eq!("minimax".parse::<SearchType>().unwrap(), SearchType::Minimax);
        assert_eq!("Alpha-Beta".parse::<SearchType>().unwrap(), SearchType::AlphaBeta);
        assert_eq!("pruned".parse::<SearchType>().unwrap(), SearchType::AlphaBeta);
        assert!(matches!(
            "negamax".parse::<SearchType>(),
            Err(Error::UnknownSearchType { .. })
        ));
    }
}
