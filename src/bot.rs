//! Automated opponent: square selection and the cancellable reply task.

use crate::config::BotSelection;
use rand::Rng;
use rewind_tictactoe::{Board, Position};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Identity of one armed reply.
///
/// `generation` names the game the reply was armed for and changes on
/// every reset; `ticket` changes on every arm. A reply only lands if both
/// still match when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArmToken {
    /// Game identity at arm time.
    pub generation: u64,
    /// Arm sequence number within the session.
    pub ticket: u64,
}

/// Picks an index into a list of `empty_count` candidates.
///
/// Returns `None` when there is nothing to pick. With
/// [`BotSelection::ExcludeLast`] the draw covers `[0, empty_count - 2]`,
/// collapsing to index 0 when a single candidate remains.
pub fn pick_index<R: Rng + ?Sized>(
    rng: &mut R,
    empty_count: usize,
    selection: BotSelection,
) -> Option<usize> {
    if empty_count == 0 {
        return None;
    }

    let upper = match selection {
        BotSelection::ExcludeLast => (empty_count - 1).max(1),
        BotSelection::Uniform => empty_count,
    };
    Some(rng.gen_range(0..upper))
}

/// Chooses an empty square on `board`, scanning in board order.
#[instrument(skip(rng, board), fields(empty = board.empty_positions().len()))]
pub fn pick_move<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    selection: BotSelection,
) -> Option<Position> {
    let empty = board.empty_positions();
    let choice = pick_index(rng, empty.len(), selection).map(|i| empty[i]);
    debug!(candidates = ?empty, ?choice, "Bot picked square");
    choice
}

/// Handle on the pending reply task. Aborts the task on drop.
#[derive(Debug, Default)]
pub struct BotTask {
    pending: Option<(ArmToken, JoinHandle<()>)>,
}

impl BotTask {
    /// Stores a freshly spawned reply, aborting any previous one.
    pub fn arm(&mut self, token: ArmToken, handle: JoinHandle<()>) {
        self.cancel();
        self.pending = Some((token, handle));
    }

    /// Aborts the pending reply, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some((token, handle)) => {
                debug!(?token, "Cancelling bot reply");
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Releases the handle of the reply identified by `token` without
    /// aborting it. Used by the reply itself once it has fired.
    pub fn release(&mut self, token: ArmToken) {
        if self.token() == Some(token) {
            self.pending = None;
        }
    }

    /// Token of the pending reply.
    pub fn token(&self) -> Option<ArmToken> {
        self.pending.as_ref().map(|(token, _)| *token)
    }

    /// Whether a reply is pending.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for BotTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
