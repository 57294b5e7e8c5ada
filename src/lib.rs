//! Tic-Tac-Toe AI Engine
//!
//! A 3x3 tic-tac-toe engine whose AI plays perfectly by searching the
//! whole game tree:
//! - Exhaustive minimax
//! - Minimax with alpha-beta pruning (same result, fewer nodes)
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legal moves, winning lines, terminal detection
//! - [`eval`]: Utility of finished games
//! - [`search`]: Minimax and alpha-beta searchers
//! - [`engine`]: Entry points used by the game loops
//! - [`console`] and [`ui`]: console and egui front-ends
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Player};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! // Human (X) takes the center
//! board.place(4, Player::X).unwrap();
//!
//! // AI responds as O
//! let idx = engine.get_move(&board, Player::O, Player::X).unwrap();
//! board.place(idx, Player::O).unwrap();
//! println!("AI plays cell {}", idx + 1);
//! ```
//!
//! # Search
//!
//! Both searches score only finished games (+1 win, 0 draw, -1 loss for
//! the AI) and break ties by keeping the lowest cell index. Each searcher
//! counts the nodes of its own last search.

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::GameConfig;
pub use engine::{choose_move_exhaustive, choose_move_pruned, AIEngine, MoveResult, SearchType};
pub use error::{Error, Result};
