//! Tic-tac-toe duel library - two-mode tic-tac-toe engine
//!
//! Human-vs-human and human-vs-computer tic-tac-toe with a random-move
//! computer opponent.
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules, random opponent and the turn engine
//! - **Session**: async wrapper that runs deferred computer moves
//! - **Config**: TOML-backed engine settings
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{EngineConfig, GameEngine, TurnOutcome};
//!
//! let mut game = GameEngine::new(EngineConfig::default());
//! game.start_game("Alice", "Bob");
//! for index in [0, 3, 1, 4] {
//!     game.play_turn(index).unwrap();
//! }
//! let outcome = game.play_turn(2).unwrap();
//! assert!(matches!(outcome, TurnOutcome::Finished(_)));
//! assert_eq!(game.message().as_deref(), Some("Alice wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, GameMode, MoveValidation};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, SessionId, SessionManager};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, COMPUTER_NAME, Cell, ChannelPresenter, EngineError, GameEngine, GameEvent,
    GameSnapshot, Marker, MoveRejection, NullPresenter, Outcome, Phase, Player, PlayerKind,
    Position, Presenter, Seat, TurnOutcome, pick_move, rules,
};
