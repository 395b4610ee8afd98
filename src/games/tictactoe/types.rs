//! Core domain types for tic-tac-toe.

use super::error::MoveRejection;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Name that marks a seat as computer-controlled when only a name is given.
pub const COMPUTER_NAME: &str = "Computer";

/// Symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Marker {
    /// Marker of player 1 (moves first).
    X,
    /// Marker of player 2.
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Marked(Marker),
}

/// 3x3 tic-tac-toe board.
///
/// Storage only: writes are unchecked apart from the index bound, so an
/// occupied cell can be overwritten. Legality is decided by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Returns all nine cells.
    pub fn get(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` when off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes `marker` into cell `index`, replacing whatever was there.
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, marker: Marker) -> Result<(), MoveRejection> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveRejection::OutOfRange)?;
        *cell = Cell::Marked(marker);
        Ok(())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; Self::SIZE];
    }

    /// Checks if a cell is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index so a player knows what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => index.to_string(),
                    Cell::Marked(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Who controls a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from the presentation layer.
    #[default]
    Human,
    /// Moves come from the random computer policy.
    Computer,
}

/// A player requested for a new game, before a marker is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Seat {
    /// Display name.
    name: String,
    /// Who controls the seat.
    kind: PlayerKind,
}

impl Seat {
    /// Creates a human seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer seat.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer,
        }
    }

    /// Creates a seat from a bare name.
    ///
    /// A name equal to [`COMPUTER_NAME`] is computer-controlled, anything else
    /// is human.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == COMPUTER_NAME {
            Self::computer(name)
        } else {
            Self::human(name)
        }
    }
}

impl From<&str> for Seat {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Seat {
    fn from(name: String) -> Self {
        Self::from_name(name)
    }
}

/// A player taking part in a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed by this player.
    marker: Marker,
    /// Who controls the player.
    kind: PlayerKind,
}

impl Player {
    /// Seats a player with the given marker.
    pub fn new(seat: Seat, marker: Marker) -> Self {
        Self {
            name: seat.name,
            marker,
            kind: seat.kind,
        }
    }

    /// Returns true if the computer policy moves for this player.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    /// Returns the seat this player was created from.
    pub fn seat(&self) -> Seat {
        Seat {
            name: self.name.clone(),
            kind: self.kind,
        }
    }
}
