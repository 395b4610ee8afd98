//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker};
use tracing::instrument;

/// The eight index triples that win when uniformly marked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and the marker that owns it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Marker, [usize; 3])> {
    let cells = board.get();
    WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| match cells[a] {
        Cell::Marked(marker) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some((marker, line))
        }
        _ => None,
    })
}

/// Checks if any line holds three identical markers.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> bool {
    winning_line(board).is_some()
}
