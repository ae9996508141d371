//! Tie detection logic for tic-tac-toe.

use crate::Board;
use super::win::evaluate_win;
use tracing::instrument;

/// A game is tied when the ninth mark has been placed and no line exists.
///
/// Win is always evaluated first by the turn scheduler, so a last move
/// that completes a line is never reported as a tie.
#[instrument(skip(board))]
pub fn evaluate_tie(board: &Board, move_count: usize) -> bool {
    move_count == 9 && evaluate_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use crate::{Player, Position, Square};
    use super::*;

    fn fill(marks: [Player; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |b, (pos, p)| b.with(*pos, Square::Occupied(p)))
    }

    #[test]
    fn test_empty_board_not_tied() {
        assert!(!evaluate_tie(&Board::new(), 0));
    }

    #[test]
    fn test_tie_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(evaluate_tie(&board, 9));
    }

    #[test]
    fn test_not_tie_before_ninth_move() {
        use Player::{O, X};
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(!evaluate_tie(&board, 8));
    }

    #[test]
    fn test_not_tie_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(!evaluate_tie(&board, 9));
    }
}
