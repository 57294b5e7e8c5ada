//! Game state management for the tic-tac-toe GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::error::{Error, Result};
use crate::rules::{is_terminal, winning_line};
use crate::{AIEngine, Board, GameConfig, MoveResult, Player, TOTAL_CELLS};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult>>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Player>,
    pub winning_line: Option<[usize; 3]>,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Player,
    pub game_over: Option<GameResult>,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            current_turn: config.first_player(),
            game_over: None,
            last_move: None,
            move_history: Vec::with_capacity(TOTAL_CELLS),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == self.config.human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == self.config.ai()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to mark a cell for the human
    pub fn try_place(&mut self, idx: usize) -> Result<()> {
        if self.game_over.is_some() {
            return Err(Error::GameOver);
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err(Error::NotYourTurn);
        }

        self.execute_move(idx)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, idx: usize) -> Result<()> {
        let player = self.current_turn;
        self.board.place(idx, player)?;

        self.move_history.push((idx, player));
        self.last_move = Some(idx);
        self.message = None;
        info!("{player} plays cell {idx}");

        if is_terminal(&self.board) {
            let line = winning_line(&self.board);
            let result = GameResult {
                winner: line.map(|(winner, _)| winner),
                winning_line: line.map(|(_, cells)| cells),
            };
            info!("game over: {:?}", result.winner);
            self.game_over = Some(result);
            return Ok(());
        }

        self.current_turn = player.opponent();
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let ai = self.config.ai();
        let human = self.config.human;
        let search_type = self.config.search_type;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(search_type);
            let result = engine.get_move_with_stats(&board, ai, human);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        match result {
            Ok(move_result) => {
                self.last_ai_result = Some(move_result);
                if let Err(err) = self.execute_move(move_result.best_move) {
                    self.message = Some(err.to_string());
                }
            }
            Err(err) => {
                warn!("AI search failed: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last human move (and the AI reply after it).
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        while let Some((idx, player)) = self.move_history.pop() {
            self.board.remove(idx);
            self.current_turn = player;
            if player == self.config.human {
                break;
            }
        }

        self.game_over = None;
        self.last_move = self.move_history.last().map(|&(idx, _)| idx);
        self.message = None;
    }
}
