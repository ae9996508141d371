//! Move requests and the errors returned when a request is refused.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A mark to place: who and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Mover.
    pub player: Player,
    /// Target square.
    pub position: Position,
}

impl Move {
    /// Builds a move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a move was refused. The game is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Someone already played there.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested index is not on the board.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The mover is not the active player.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A post-move consistency check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when navigating history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step does not exist in the current history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },

    /// Time travel is disabled once the game is decided.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for JumpError {}
