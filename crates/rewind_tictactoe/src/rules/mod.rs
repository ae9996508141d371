//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the turn scheduler can compose them.

pub mod draw;
pub mod placement;
pub mod win;

pub use draw::evaluate_tie;
pub use placement::apply_move;
pub use win::{evaluate_win, WinningLine, LINES};
