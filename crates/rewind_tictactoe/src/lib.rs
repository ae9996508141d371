//! Pure tic-tac-toe game logic with branch-and-overwrite history.
//!
//! # Architecture
//!
//! - **Board & rules**: copy-on-write [`Board`], [`rules::apply_move`],
//!   [`rules::evaluate_win`] and [`rules::evaluate_tie`]
//! - **History**: [`History`] of board snapshots with a viewing pointer
//! - **Turn scheduling**: [`GameState`] validates moves, classifies them as
//!   [`MoveOutcome`]s and tells the caller when the opponent should reply
//! - **Invariants**: composable checks run after every accepted move in
//!   debug builds
//!
//! Nothing here is async; scheduling the automated opponent is left to the
//! caller, driven by [`MoveOutcome::Continue`]'s `arm_bot` flag.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.place(index).unwrap();
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use game::GameState;
pub use history::History;
pub use position::Position;
pub use rules::WinningLine;
pub use status::{GameStatus, MoveOutcome};
pub use types::{Board, Player, Square};
