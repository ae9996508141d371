//! Consistency checks over [`GameState`](crate::GameState).
//!
//! Run after every accepted move in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What should have held.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Tuples of invariants, checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(collect::<S, $inv>(state, &mut violations);)+
                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod counter_matches_pointer;
pub mod history_anchored;
pub mod pointer_in_bounds;

pub use counter_matches_pointer::CounterMatchesPointerInvariant;
pub use history_anchored::HistoryAnchoredInvariant;
pub use pointer_in_bounds::PointerInBoundsInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    HistoryAnchoredInvariant,
    PointerInBoundsInvariant,
    CounterMatchesPointerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_jump() {
        let mut game = GameState::new();
        for i in [0, 4, 8] {
            game.place(i).unwrap();
        }
        game.jump_to(1).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        let marked = Board::new().with(Position::Center, Square::Occupied(Player::X));
        game.history.commit(marked);
        game.board = marked;
        game.move_count = 7;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            CounterMatchesPointerInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryAnchoredInvariant, PointerInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
