//! Pointer invariant: the viewing pointer indexes a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: The viewing pointer is a valid index and the displayed board
/// is the snapshot it points at.
pub struct PointerInBoundsInvariant;

impl Invariant<GameState> for PointerInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .get(history.pointer())
            .is_some_and(|snapshot| snapshot == game.board())
    }

    fn description() -> &'static str {
        "Viewing pointer indexes history and matches the displayed board"
    }
}
