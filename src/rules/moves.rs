//! Move generation

use crate::board::{Board, Player};

/// All empty cell indices in ascending order.
///
/// The order matters: searches explore moves in this order and keep the
/// first move that reaches the best value.
#[inline]
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.empty_cells().iter_ones().collect()
}

/// Side to move next, given which side made the first move of the game.
pub fn side_to_move(board: &Board, first: Player) -> Player {
    if board.count(first) > board.count(first.opponent()) {
        first.opponent()
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_empty_board() {
        assert_eq!(legal_moves(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_legal_moves_single_gap() {
        let board: Board = "XOXOXOXO.".parse().unwrap();
        assert_eq!(legal_moves(&board), vec![8]);
    }

    #[test]
    fn test_legal_moves_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board: Board = ".X.|O.O|.X.".parse().unwrap();
        assert_eq!(legal_moves(&board), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_side_to_move() {
        let board = Board::new();
        assert_eq!(side_to_move(&board, Player::X), Player::X);
        assert_eq!(side_to_move(&board, Player::O), Player::O);

        let board = board.with_move(4, Player::X);
        assert_eq!(side_to_move(&board, Player::X), Player::O);

        let board = board.with_move(0, Player::O);
        assert_eq!(side_to_move(&board, Player::X), Player::X);
    }
}
