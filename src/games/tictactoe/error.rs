//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// Index is not on the 3x3 board.
    #[display("index is outside the board (must be 0-8)")]
    OutOfRange,
    /// Cell already holds a marker.
    #[display("cell is already occupied")]
    Occupied,
}

/// Error surfaced by engine operations.
///
/// Every variant leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The move cannot be applied to the board.
    #[display("Invalid move at {index}: {reason}")]
    InvalidMove {
        /// Requested cell index.
        index: usize,
        /// Reason for refusal.
        reason: MoveRejection,
    },

    /// The operation is not allowed in the current phase.
    #[display("Cannot {operation} while game is {phase}")]
    InvalidState {
        /// Operation that was attempted.
        operation: &'static str,
        /// Phase the game was in.
        phase: &'static str,
    },

    /// A deferred computer move outlived the game it was scheduled for.
    #[display("Computer move scheduled for game {scheduled_for} but game {current} is active")]
    StaleComputerMove {
        /// Game id captured at scheduling time.
        scheduled_for: u64,
        /// Game id at execution time.
        current: u64,
    },

    /// The computer had nowhere to move.
    #[display("No empty cells left for the computer")]
    NoEmptyCells,
}
