use tictactoe::eval::{evaluate, Utility};
use tictactoe::rules::{is_terminal, legal_moves, winning_mark};
use tictactoe::search::{AlphaBetaSearcher, MinimaxSearcher};
use tictactoe::{choose_move_exhaustive, choose_move_pruned, Board, Error, Player};

#[test]
fn empty_board_is_a_draw_for_both_searches() {
    let board = Board::new();
    let full = MinimaxSearcher::new().search(&board, Player::O, Player::O, Player::X);
    let pruned = AlphaBetaSearcher::new().search(&board, Player::O, Player::O, Player::X);

    assert_eq!(full.value, Utility::DRAW);
    assert_eq!(pruned.value, Utility::DRAW);
}

#[test]
fn o_to_move_plays_index_two() -> Result<(), Error> {
    let board: Board = "XX.|OO.|...".parse()?;

    assert_eq!(choose_move_exhaustive(&board, Player::O, Player::X)?, 2);
    assert_eq!(choose_move_pruned(&board, Player::O, Player::X)?, 2);

    let result = AlphaBetaSearcher::new().search(&board, Player::O, Player::O, Player::X);
    assert_eq!(result.best_move, Some(2));
    assert_eq!(result.value, Utility::WIN);
    Ok(())
}

#[test]
fn x_completes_row_and_wins() -> Result<(), Error> {
    let board: Board = "XX.|OO.|...".parse()?;
    assert_eq!(choose_move_pruned(&board, Player::X, Player::O)?, 2);

    let after = board.with_move(2, Player::X);
    assert!(is_terminal(&after));
    assert_eq!(evaluate(&after, Player::X, Player::O), Utility::WIN);
    Ok(())
}

#[test]
fn full_board_without_line_is_a_draw() -> Result<(), Error> {
    let board: Board = "XOX|XOO|OXX".parse()?;

    assert!(is_terminal(&board));
    assert_eq!(winning_mark(&board), None);
    assert_eq!(evaluate(&board, Player::X, Player::O), Utility::DRAW);
    assert_eq!(evaluate(&board, Player::O, Player::X), Utility::DRAW);
    Ok(())
}

#[test]
fn single_empty_cell_is_the_only_move() -> Result<(), Error> {
    let board: Board = "XOX|OXO|XO.".parse()?;
    assert_eq!(legal_moves(&board), vec![8]);
    Ok(())
}

#[test]
fn ties_go_to_the_lowest_index() -> Result<(), Error> {
    // Every opening draws
    assert_eq!(choose_move_pruned(&Board::new(), Player::X, Player::O)?, 0);
    assert_eq!(choose_move_exhaustive(&Board::new(), Player::X, Player::O)?, 0);

    // X can win at 2 (row) or 6 (column); 2 comes first
    let board: Board = "XX.|XOO|.O.".parse()?;
    assert_eq!(choose_move_exhaustive(&board, Player::X, Player::O)?, 2);
    assert_eq!(choose_move_pruned(&board, Player::X, Player::O)?, 2);
    Ok(())
}

#[test]
fn terminal_board_has_no_move() -> Result<(), Error> {
    let board: Board = "XXX|OO.|...".parse()?;
    assert!(matches!(choose_move_pruned(&board, Player::O, Player::X), Err(Error::GameOver)));
    assert!(matches!(choose_move_exhaustive(&board, Player::O, Player::X), Err(Error::GameOver)));
    Ok(())
}
