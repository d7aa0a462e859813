//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// The engine checks the mover's lines first, so a full board reached
/// without a win is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| !cell.is_empty())
}
