//! Console front-end: board rendering, move input and the game loop
//!
//! The loop works over any `BufRead`/`Write` pair, so it can be driven by
//! stdin/stdout or by a scripted buffer.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::board::{Board, Cell, Player, BOARD_SIZE, TOTAL_CELLS};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::error::{Error, Result};
use crate::rules::{is_terminal, winning_mark};

/// How a console game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    AiWin,
    Draw,
    /// Input ran out before the game finished
    Abandoned,
}

/// Render the board as a 3x3 grid:
///
/// ```text
///  X | X |   
/// ---+---+---
///  O | O |   
/// ---+---+---
///    |   |   
/// ```
pub fn render(board: &Board) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| match board.get(row * BOARD_SIZE + col) {
                Cell::Empty => " ".to_string(),
                Cell::Mark(player) => player.to_string(),
            })
            .collect();
        rows.push(format!(" {} ", cells.join(" | ")));
    }
    rows.join("\n---+---+---\n")
}

/// Parse a 1-based move ("1" to "9") into a free cell index.
pub fn parse_move(input: &str, board: &Board) -> Result<usize> {
    let trimmed = input.trim();
    let number: i64 = trimmed.parse().map_err(|_| Error::NotANumber {
        input: trimmed.to_string(),
    })?;
    if !(1..=TOTAL_CELLS as i64).contains(&number) {
        return Err(Error::MoveOutOfRange { number });
    }
    let idx = (number - 1) as usize;
    if !board.is_empty(idx) {
        return Err(Error::CellOccupied { index: idx });
    }
    Ok(idx)
}

/// Result of a finished board from the human's point of view
pub fn outcome(board: &Board, human: Player, ai: Player) -> Outcome {
    match winning_mark(board) {
        Some(winner) if winner == human => Outcome::HumanWin,
        Some(winner) if winner == ai => Outcome::AiWin,
        _ => Outcome::Draw,
    }
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HumanWin => "You win!",
        Outcome::AiWin => "AI wins!",
        Outcome::Draw => "It's a draw!",
        Outcome::Abandoned => "Game abandoned.",
    }
}

/// Ask a yes/no question; anything starting with `y` is yes.
/// End of input counts as no.
pub fn ask_yes_no<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{prompt} (y/n): ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_ascii_lowercase().starts_with('y'))
}

/// Play one game: human moves are read from `input`, everything is
/// written to `output`.
pub fn run<R: BufRead, W: Write>(config: &GameConfig, input: &mut R, output: &mut W) -> Result<Outcome> {
    let human = config.human;
    let ai = config.ai();
    let mut engine = AIEngine::with_config(config.search_type);
    let mut board = Board::new();
    let mut current = config.first_player();

    writeln!(output, "Welcome to Tic-Tac-Toe (You are {human}, AI is {ai})")?;
    writeln!(output, "\n{}\n", render(&board))?;

    let mut line = String::new();
    while !is_terminal(&board) {
        if current == human {
            write!(output, "Enter your move (1-9): ")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("input closed before the game finished");
                writeln!(output)?;
                return Ok(Outcome::Abandoned);
            }
            match parse_move(&line, &board) {
                Ok(idx) => board.place(idx, human)?,
                Err(err) => {
                    warn!("rejected move {:?}: {err}", line.trim());
                    let message = match err {
                        Error::NotANumber { .. } => "Please enter a number 1-9.",
                        _ => "Invalid move. Try again.",
                    };
                    writeln!(output, "{message}")?;
                    continue;
                }
            }
        } else {
            writeln!(output, "AI is thinking...")?;
            let result = engine.get_move_with_stats(&board, ai, human)?;
            board.place(result.best_move, ai)?;
            info!("AI plays {} (value {})", result.best_move, result.value);
            writeln!(
                output,
                "AI chose position {} ({} nodes: {})",
                result.best_move + 1,
                result.search_type,
                result.nodes
            )?;
        }

        writeln!(output, "\n{}\n", render(&board))?;
        current = current.opponent();
    }

    let result = outcome(&board, human, ai);
    info!("game over: {result:?} on {board}");
    writeln!(output, "{}", outcome_message(result))?;
    Ok(result)
}
