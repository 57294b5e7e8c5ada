//! Game configuration shared by the console and graphical front-ends.

use crate::board::Player;
use crate::engine::SearchType;

/// Who plays which mark, who starts, and how the AI searches.
///
/// # Examples
///
/// ```
/// use tictactoe::{GameConfig, Player, SearchType};
///
/// let config = GameConfig::new(Player::O)
///     .with_human_first(false)
///     .with_search_type(SearchType::Minimax);
///
/// assert_eq!(config.ai(), Player::X);
/// assert_eq!(config.first_player(), Player::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Mark played by the human
    pub human: Player,
    /// Whether the human makes the first move
    pub human_first: bool,
    /// Search variant used by the AI
    pub search_type: SearchType,
}

impl GameConfig {
    /// Human plays `human`, moves first, AI uses alpha-beta.
    pub fn new(human: Player) -> Self {
        Self {
            human,
            human_first: true,
            search_type: SearchType::default(),
        }
    }

    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Mark played by the AI
    #[inline]
    pub fn ai(&self) -> Player {
        self.human.opponent()
    }

    /// Side making the first move
    #[inline]
    pub fn first_player(&self) -> Player {
        if self.human_first {
            self.human
        } else {
            self.ai()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
