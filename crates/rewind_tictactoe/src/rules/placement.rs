//! Mark placement for tic-tac-toe.

use super::super::{Board, MoveError, Player, Position, Square};
use tracing::{instrument, trace};

/// Places `player`'s mark at board index `index`, returning the new board.
///
/// The input board is never modified. Fails with
/// [`MoveError::OutOfRange`] for indices past 8 and
/// [`MoveError::SquareOccupied`] when the square already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    trace!(position = %pos, %player, "Placing mark");
    Ok(board.with(pos, Square::Occupied(player)))
}
