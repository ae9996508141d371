//! Game status and move outcomes.

use super::rules::WinningLine;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// Exactly one variant holds at a time. `Won` and `Tied` are terminal
/// until the game is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board is full with no line.
    Tied,
}

impl GameStatus {
    /// Returns true if the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line, if the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { player, line } => Some(WinningLine {
                player: *player,
                line: *line,
            }),
            _ => None,
        }
    }
}

impl From<WinningLine> for GameStatus {
    fn from(win: WinningLine) -> Self {
        GameStatus::Won {
            player: win.player,
            line: win.line,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { player, .. } => write!(f, "Player {} wins", player),
            GameStatus::Tied => write!(f, "Tied"),
        }
    }
}

/// Classification of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game continues with `next` to move.
    Continue {
        /// Player whose turn it now is.
        next: Player,
        /// True when the mover was the first player, so the opponent's
        /// automated reply should be scheduled.
        arm_bot: bool,
    },
    /// The move completed a line.
    Won(WinningLine),
    /// The move filled the board without a line.
    Tied,
}
