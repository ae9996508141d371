//! Game state aggregate and turn scheduling.
//!
//! [`GameState`] is the single owner of board, history, move counter,
//! active player and status. All mutation goes through [`GameState::submit`],
//! [`GameState::place`] and [`GameState::jump_to`]; a rejected request
//! leaves the state exactly as it was.

use super::action::{JumpError, Move, MoveError};
use super::history::History;
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{apply_move, evaluate_tie, evaluate_win};
use super::status::{GameStatus, MoveOutcome};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) history: History,
    pub(crate) move_count: usize,
    pub(crate) active: Player,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: History::new(),
            move_count: 0,
            active: Player::FIRST,
            status: GameStatus::InProgress,
        }
    }

    /// The board currently displayed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Marks placed on the displayed board's line of play.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Whether history steps can currently be selected.
    pub fn can_time_travel(&self) -> bool {
        !self.status.is_over() && self.history.is_selectable()
    }

    /// Places a mark for the active player at board index `index`.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn place(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected: out of range");
            MoveError::OutOfRange(index)
        })?;
        self.submit(Move::new(self.active, pos))
    }

    /// Validates and applies a move.
    ///
    /// Win is evaluated before tie. The resulting snapshot is committed
    /// to history in every case; only the player flip and bot arming stop
    /// once the game is decided.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn submit(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            warn!(%action, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        if action.player != self.active {
            warn!(%action, active = %self.active, "Move rejected: wrong player");
            return Err(MoveError::WrongPlayer(action.player));
        }

        let board = apply_move(&self.board, action.position.to_index(), action.player)
            .inspect_err(|e| warn!(%action, error = %e, "Move rejected"))?;

        let mut next = self.clone();
        next.board = board;
        next.move_count += 1;
        next.history.commit(board);

        let outcome = if let Some(win) = evaluate_win(&board) {
            next.status = win.into();
            info!(winner = %win.player, line = ?win.indices(), "Game won");
            MoveOutcome::Won(win)
        } else if evaluate_tie(&board, next.move_count) {
            next.status = GameStatus::Tied;
            info!("Game tied");
            MoveOutcome::Tied
        } else {
            next.active = action.player.opponent();
            MoveOutcome::Continue {
                next: next.active,
                arm_bot: action.player == Player::FIRST,
            }
        };

        #[cfg(debug_assertions)]
        GameInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        *self = next;
        debug!(%action, ?outcome, step = self.history.pointer(), "Move accepted");
        Ok(outcome)
    }

    /// Travels to history step `step`.
    ///
    /// Only the viewing pointer, displayed board and move counter change.
    /// The active player is left as is.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if self.status.is_over() {
            warn!(step, "Jump rejected: game over");
            return Err(JumpError::GameOver);
        }

        let board = *self
            .history
            .jump_to(step)
            .inspect_err(|e| warn!(error = %e, "Jump rejected"))?;
        self.board = board;
        self.move_count = step;
        debug!(step, "Jumped");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
