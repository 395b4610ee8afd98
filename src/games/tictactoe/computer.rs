//! Random computer opponent.

use super::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks an empty cell uniformly at random.
///
/// Returns `None` only on a full board.
#[instrument(skip(board, rng))]
pub fn pick_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty = board.empty_cells();
    let choice = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?choice, "Computer chose cell");
    choice
}
