//! Engine configuration loaded from TOML.

use crate::games::tictactoe::Seat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How strictly the engine checks a requested cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveValidation {
    /// Occupied cells are overwritten and the move counts.
    #[default]
    Permissive,
    /// Occupied cells are rejected with an error.
    Strict,
}

/// Which pair of seats a new game uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays X against the computer.
    Computer,
}

impl GameMode {
    /// Builds the two seats for this mode from configured names.
    #[instrument(skip(config))]
    pub fn seats(self, config: &EngineConfig) -> (Seat, Seat) {
        let first = Seat::human(config.player_one_name.clone());
        let second = match self {
            Self::TwoPlayer => Seat::human(config.player_two_name.clone()),
            Self::Computer => Seat::computer(config.computer_name.clone()),
        };
        (first, second)
    }
}

/// Configuration for a game engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Whether occupied cells may be overwritten.
    #[serde(default)]
    move_validation: MoveValidation,

    /// Seed for the computer's RNG. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Name of player 1.
    #[serde(default = "default_player_one_name")]
    player_one_name: String,

    /// Name of player 2 in two-player mode.
    #[serde(default = "default_player_two_name")]
    player_two_name: String,

    /// Name of the computer opponent.
    #[serde(default = "default_computer_name")]
    computer_name: String,
}

fn default_computer_delay_ms() -> u64 {
    1000
}

fn default_player_one_name() -> String {
    "player 1".to_string()
}

fn default_player_two_name() -> String {
    "player 2".to_string()
}

fn default_computer_name() -> String {
    crate::games::tictactoe::COMPUTER_NAME.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            move_validation: MoveValidation::default(),
            seed: None,
            player_one_name: default_player_one_name(),
            player_two_name: default_player_two_name(),
            computer_name: default_computer_name(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            delay_ms = config.computer_delay_ms,
            validation = %config.move_validation,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Pause before the computer moves.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Overrides the computer delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Overrides the move validation mode.
    pub fn with_move_validation(mut self, move_validation: MoveValidation) -> Self {
        self.move_validation = move_validation;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
