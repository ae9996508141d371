//! History anchor invariant: history is non-empty and starts from an empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History holds at least one snapshot and snapshot 0 is empty.
pub struct HistoryAnchoredInvariant;

impl Invariant<GameState> for HistoryAnchoredInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .first()
            .is_some_and(|first| *first == Board::new())
    }

    fn description() -> &'static str {
        "History is non-empty and snapshot 0 is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{History, Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryAnchoredInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_after_moves_holds() {
        let mut game = GameState::new();
        game.place(0).unwrap();
        game.place(4).unwrap();
        assert!(HistoryAnchoredInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_anchor_violates() {
        let mut game = GameState::new();
        let marked = Board::new().with(Position::Center, Square::Occupied(Player::X));
        game.history = History::from_parts(vec![marked], 0, false);
        assert!(!HistoryAnchoredInvariant::holds(&game));
    }
}
