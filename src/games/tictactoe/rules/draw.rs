//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// Only meaningful as a draw once [`check_win`](super::check_win) is false.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.get().iter().all(|cell| *cell != Cell::Empty)
}
