use std::io::Cursor;

use tictactoe::console::{self, Outcome};
use tictactoe::rules::{is_terminal, legal_moves, winning_mark};
use tictactoe::{AIEngine, Board, GameConfig, Player, SearchType};

/// Play every possible human line against the engine; return how many
/// finished games each outcome produced as (ai wins, draws).
fn play_all_lines(engine: &mut AIEngine, board: Board, to_move: Player, ai: Player) -> (u32, u32) {
    if is_terminal(&board) {
        return match winning_mark(&board) {
            Some(winner) if winner == ai => (1, 0),
            Some(winner) => panic!("AI lost as {ai}: {winner} won on {board}"),
            None => (0, 1),
        };
    }

    let human = ai.opponent();
    if to_move == ai {
        let mv = engine.get_move(&board, ai, human).expect("non-terminal board has a move");
        play_all_lines(engine, board.with_move(mv, ai), human, ai)
    } else {
        legal_moves(&board).into_iter().fold((0, 0), |(wins, draws), mv| {
            let (w, d) = play_all_lines(engine, board.with_move(mv, human), ai, ai);
            (wins + w, draws + d)
        })
    }
}

#[test]
fn ai_never_loses() {
    for ai in [Player::X, Player::O] {
        for ai_first in [true, false] {
            let mut engine = AIEngine::with_config(SearchType::AlphaBeta);
            let to_move = if ai_first { ai } else { ai.opponent() };
            let (wins, draws) = play_all_lines(&mut engine, Board::new(), to_move, ai);
            assert!(wins + draws > 0);
        }
    }
}

#[test]
fn exhaustive_ai_never_loses_moving_second() {
    let mut engine = AIEngine::with_config(SearchType::Minimax);
    let (wins, draws) = play_all_lines(&mut engine, Board::new(), Player::X, Player::O);
    assert!(wins > 0);
    assert!(draws > 0);
}

#[test]
fn perfect_play_from_empty_board_draws() {
    let mut board = Board::new();
    let mut engine = AIEngine::new();
    let mut to_move = Player::X;

    while !is_terminal(&board) {
        let result = engine
            .get_move_with_stats(&board, to_move, to_move.opponent())
            .expect("game still running");
        assert_eq!(result.value, 0, "self-play left the draw on {board}");
        board.place(result.best_move, to_move).expect("engine picked a free cell");
        to_move = to_move.opponent();
    }

    assert_eq!(winning_mark(&board), None);
}

#[test]
fn scripted_console_game_ends_without_human_win() {
    // Human always tries the lowest cell; occupied ones are re-prompted
    let script: String = (0..9).flat_map(|_| (1..=9).map(|n| format!("{n}\n"))).collect();

    for search_type in [SearchType::Minimax, SearchType::AlphaBeta] {
        let config = GameConfig::default().with_search_type(search_type);
        let mut output = Vec::new();

        let outcome = console::run(&config, &mut Cursor::new(script.clone()), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(matches!(outcome, Outcome::AiWin | Outcome::Draw), "{search_type}: {outcome:?}");
        assert!(text.contains(console::outcome_message(outcome)));
        assert!(text.contains(&format!("({search_type} nodes: ")));
    }
}
