//! Line detection.

use crate::{Board, Player, Position, Position as P, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in evaluation order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [P::TopLeft, P::TopCenter, P::TopRight],
    [P::MiddleLeft, P::Center, P::MiddleRight],
    [P::BottomLeft, P::BottomCenter, P::BottomRight],
    [P::TopLeft, P::MiddleLeft, P::BottomLeft],
    [P::TopCenter, P::Center, P::BottomCenter],
    [P::TopRight, P::MiddleRight, P::BottomRight],
    [P::TopLeft, P::Center, P::BottomRight],
    [P::TopRight, P::Center, P::BottomLeft],
];

/// A completed line and its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player owning all three squares.
    pub player: Player,
    /// The three positions of the line.
    pub line: [Position; 3],
}

impl WinningLine {
    /// The line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Returns the first line in [`LINES`] fully owned by one player.
#[instrument(skip(board))]
pub fn evaluate_win(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|line| {
        let owners = line.map(|pos| board.get(pos));
        match owners {
            [Square::Occupied(player), b, c] if b == Square::Occupied(player) && c == b => {
                Some(WinningLine { player, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, (pos, p)| b.with(*pos, Square::Occupied(*p)))
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let win = evaluate_win(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_empty_board_has_no_line() {
        assert_eq!(evaluate_win(&Board::new()), None);
    }

    #[test]
    fn test_middle_column() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert_eq!(evaluate_win(&board).unwrap().indices(), [1, 4, 7]);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let win = evaluate_win(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_rows_are_scanned_before_columns() {
        // X owns both row 0 and column 0; row comes first in LINES.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate_win(&board).unwrap().indices(), [0, 1, 2]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate_win(&board), None);
    }
}
