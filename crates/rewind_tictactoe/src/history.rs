//! Branch-and-overwrite move history.
//!
//! History is a single branch of board snapshots plus a viewing pointer.
//! Jumping back only moves the pointer; the next commit after a jump
//! discards every snapshot past the pointer before appending.

use super::action::JumpError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered snapshots of one branch of play.
///
/// Snapshot 0 is always the empty board and the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Board>,
    pointer: usize,
    branch_pending: bool,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            pointer: 0,
            branch_pending: false,
        }
    }

    /// Builds a history from raw parts without checking anything.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, pointer: usize, branch_pending: bool) -> Self {
        Self {
            snapshots,
            pointer,
            branch_pending,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot currently viewed.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Whether the next commit will overwrite snapshots past the pointer.
    pub fn branch_pending(&self) -> bool {
        self.branch_pending
    }

    /// The snapshot under the viewing pointer.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.pointer]
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// A step can be selected only once there is something to travel to.
    pub fn is_selectable(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Moves the viewing pointer to `step` and marks a branch as pending.
    ///
    /// The snapshot list itself is untouched.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<&Board, JumpError> {
        if step >= self.snapshots.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }

        self.pointer = step;
        self.branch_pending = true;
        debug!(step, "Viewing pointer moved");
        Ok(&self.snapshots[step])
    }

    /// Records `snapshot` as the newest step.
    ///
    /// With a pending branch the list is first cut back to
    /// `[0..=pointer]`. Either way the pointer ends on the new snapshot.
    #[instrument(skip(self, snapshot), fields(pointer = self.pointer, branch_pending = self.branch_pending))]
    pub fn commit(&mut self, snapshot: Board) {
        if self.branch_pending {
            let discarded = self.snapshots.len() - (self.pointer + 1);
            self.snapshots.truncate(self.pointer + 1);
            debug!(discarded, "Branch overwritten");
        }

        self.snapshots.push(snapshot);
        self.pointer = self.snapshots.len() - 1;
        self.branch_pending = false;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;
    use crate::Player;

    fn history_of(moves: &[usize]) -> History {
        let mut history = History::new();
        let mut player = Player::X;
        for &m in moves {
            let next = apply_move(history.current(), m, player).unwrap();
            history.commit(next);
            player = player.opponent();
        }
        history
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &Board::new());
        assert!(!history.is_selectable());
    }

    #[test]
    fn test_commit_appends_and_advances() {
        let history = history_of(&[0, 4, 8]);
        assert_eq!(history.len(), 4);
        assert_eq!(history.pointer(), 3);
        assert!(history.is_selectable());
    }

    #[test]
    fn test_jump_does_not_mutate_snapshots() {
        let mut history = history_of(&[0, 4, 8]);
        let before = history.snapshots().to_vec();
        history.jump_to(1).unwrap();
        assert_eq!(history.snapshots(), before.as_slice());
        assert_eq!(history.pointer(), 1);
        assert!(history.branch_pending());
    }

    #[test]
    fn test_commit_after_jump_truncates() {
        let mut history = history_of(&[0, 4, 8, 2]);
        history.jump_to(1).unwrap();
        let next = apply_move(history.current(), 5, Player::O).unwrap();
        history.commit(next);

        assert_eq!(history.len(), 3);
        assert_eq!(history.pointer(), 2);
        assert!(!history.branch_pending());
        assert_eq!(history.current(), &next);
    }

    #[test]
    fn test_jump_to_start_then_commit() {
        let mut history = history_of(&[0, 4]);
        history.jump_to(0).unwrap();
        let next = apply_move(history.current(), 8, Player::X).unwrap();
        history.commit(next);
        assert_eq!(history.len(), 2);
        assert_eq!(history.snapshots()[0], Board::new());
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = history_of(&[0]);
        assert_eq!(
            history.jump_to(2),
            Err(JumpError::OutOfRange { step: 2, len: 2 })
        );
        assert_eq!(history.pointer(), 1);
        assert!(!history.branch_pending());
    }
}
