//! Tic-tac-toe: board, rules, random opponent and turn engine.

mod computer;
mod engine;
mod error;
mod position;
mod presenter;
pub mod rules;
mod types;

pub use computer::pick_move;
pub use engine::{GameEngine, GameSnapshot, Outcome, Phase, TurnOutcome};
pub use error::{EngineError, MoveRejection};
pub use position::Position;
pub use presenter::{ChannelPresenter, GameEvent, NullPresenter, Presenter};
pub use types::{Board, COMPUTER_NAME, Cell, Marker, Player, PlayerKind, Seat};
