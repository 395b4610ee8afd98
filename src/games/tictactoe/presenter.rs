//! Notifications from the engine to whatever renders the game.

use super::types::{Board, Marker, Player};
use tokio::sync::mpsc;
use tracing::debug;

/// Receiver of engine notifications.
///
/// The engine calls these after it has mutated state; implementations only
/// render. All methods default to doing nothing.
pub trait Presenter: Send {
    /// The board changed.
    fn render_board(&mut self, _board: &Board) {}

    /// A new turn began.
    fn display_turn(&mut self, _player: &Player) {}

    /// The computer is about to move for `player`.
    fn computer_pending(&mut self, _player: &Player) {}

    /// The game ended with `message`.
    fn end_game(&mut self, _message: &str) {}
}

/// Presenter that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Messages sent from the engine to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board state updated.
    BoardChanged(Board),
    /// It is now this player's turn.
    TurnChanged {
        /// Display name of the current player.
        name: String,
        /// Marker of the current player.
        marker: Marker,
    },
    /// Computer is thinking.
    ComputerThinking {
        /// Display name of the computer player.
        name: String,
    },
    /// Game ended.
    GameOver {
        /// End-of-game message.
        message: String,
    },
}

/// Presenter that forwards notifications over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelPresenter {
    /// Creates a presenter sending to `event_tx`.
    pub fn new(event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { event_tx }
    }

    fn send(&self, event: GameEvent) {
        if let Err(e) = self.event_tx.send(event) {
            debug!(event = ?e.0, "Event receiver dropped");
        }
    }
}

impl Presenter for ChannelPresenter {
    fn render_board(&mut self, board: &Board) {
        self.send(GameEvent::BoardChanged(board.clone()));
    }

    fn display_turn(&mut self, player: &Player) {
        self.send(GameEvent::TurnChanged {
            name: player.name().clone(),
            marker: *player.marker(),
        });
    }

    fn computer_pending(&mut self, player: &Player) {
        self.send(GameEvent::ComputerThinking {
            name: player.name().clone(),
        });
    }

    fn end_game(&mut self, message: &str) {
        self.send(GameEvent::GameOver {
            message: message.to_string(),
        });
    }
}
