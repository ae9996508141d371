//! Move counter invariant: one mark per committed snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: The move counter equals the viewing pointer, and the
/// displayed board carries exactly that many marks.
pub struct CounterMatchesPointerInvariant;

impl Invariant<GameState> for CounterMatchesPointerInvariant {
    fn holds(game: &GameState) -> bool {
        game.move_count() == game.history().pointer() && game.board().occupied() == game.move_count()
    }

    fn description() -> &'static str {
        "Move counter matches viewing pointer and marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_moves_and_jumps() {
        let mut game = GameState::new();
        for i in [0, 4, 8, 2] {
            game.place(i).unwrap();
            assert!(CounterMatchesPointerInvariant::holds(&game));
        }
        game.jump_to(2).unwrap();
        assert!(CounterMatchesPointerInvariant::holds(&game));
        game.place(6).unwrap();
        assert!(CounterMatchesPointerInvariant::holds(&game));
    }

    #[test]
    fn test_drifted_counter_violates() {
        let mut game = GameState::new();
        game.place(0).unwrap();
        game.move_count = 2;
        assert!(!CounterMatchesPointerInvariant::holds(&game));
    }
}
