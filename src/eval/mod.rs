//! Evaluation of finished games
//!
//! The game tree is small enough to search to the end, so only terminal
//! boards are ever scored: win, loss or draw from one side's point of view.

pub mod score;
pub mod utility;

pub use score::Utility;
pub use utility::evaluate;
