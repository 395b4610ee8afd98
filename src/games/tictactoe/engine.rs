//! Turn orchestration for tic-tac-toe.

use super::computer;
use super::error::{EngineError, MoveRejection};
use super::presenter::{NullPresenter, Presenter};
use super::rules;
use super::types::{Board, Cell, Marker, Player, Seat};
use crate::config::{EngineConfig, MoveValidation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// Name of the winning player.
        winner: String,
        /// Marker of the winning player.
        marker: Marker,
        /// The completed line.
        line: [usize; 3],
    },
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// End-of-game message shown to players.
    pub fn message(&self) -> String {
        match self {
            Outcome::Won { winner, .. } => format!("{} wins!", winner),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No game started yet.
    #[default]
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// Game over; moves are refused.
    Ended(Outcome),
}

impl Phase {
    /// Short label for logs and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Ended(_) => "ended",
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Game continues with this player to move.
    Next(Player),
    /// The move ended the game.
    Finished(Outcome),
}

/// Serializable view of a game for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Increments on every game start.
    pub game_id: u64,
    /// Phase label.
    pub phase: String,
    /// All nine cells.
    pub cells: [Cell; 9],
    /// Player 1 and player 2, once a game has started.
    pub players: Vec<Player>,
    /// Name of the player to move (or who made the last move, once ended).
    pub current_player: Option<String>,
    /// End-of-game message, present only once the game has ended.
    pub message: Option<String>,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, both players, the turn pointer and the phase. The board is
/// written only through [`GameEngine::play_turn`].
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    players: Option<[Player; 2]>,
    current: usize,
    phase: Phase,
    game_id: u64,
    rng: ChaCha8Rng,
    presenter: Box<dyn Presenter>,
}

impl GameEngine {
    /// Creates an engine that renders nowhere.
    #[instrument(skip(config))]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_presenter(config, NullPresenter)
    }

    /// Creates an engine that reports to `presenter`.
    #[instrument(skip(config, presenter))]
    pub fn with_presenter(config: EngineConfig, presenter: impl Presenter + 'static) -> Self {
        let seed = (*config.seed()).unwrap_or_else(rand::random);
        debug!(seed, "Seeding computer RNG");
        Self {
            config,
            board: Board::new(),
            players: None,
            current: 0,
            phase: Phase::NotStarted,
            game_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            presenter: Box::new(presenter),
        }
    }

    /// Starts a new game, discarding any previous one.
    ///
    /// `first` plays X and moves first, `second` plays O.
    #[instrument(skip_all)]
    pub fn start_game(&mut self, first: impl Into<Seat>, second: impl Into<Seat>) {
        let players = [
            Player::new(first.into(), Marker::X),
            Player::new(second.into(), Marker::O),
        ];
        self.game_id += 1;
        info!(
            game_id = self.game_id,
            player_x = %players[0].name(),
            player_o = %players[1].name(),
            "Starting game"
        );

        self.players = Some(players);
        self.current = 0;
        self.phase = Phase::InProgress;
        self.board.reset();
        self.presenter.render_board(&self.board);
        self.announce_turn();
    }

    /// Starts a new game with the same two players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let Some([first, second]) = &self.players else {
            warn!("Restart requested before any game");
            return Err(self.invalid_state("restart"));
        };
        let (first, second) = (first.seat(), second.seat());
        self.reset_board();
        self.start_game(first, second);
        Ok(())
    }

    /// Places the current player's marker at `index`.
    ///
    /// Under [`MoveValidation::Permissive`] an occupied cell is overwritten and
    /// the move counts as legal.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, EngineError> {
        if self.phase != Phase::InProgress {
            warn!(phase = self.phase.label(), "Move outside of play");
            return Err(self.invalid_state("play a turn"));
        }
        let player = self
            .current_player()
            .cloned()
            .ok_or_else(|| self.invalid_state("play a turn"))?;

        if *self.config.move_validation() == MoveValidation::Strict
            && matches!(self.board.cell(index), Some(Cell::Marked(_)))
        {
            warn!(index, "Cell already occupied");
            return Err(EngineError::InvalidMove {
                index,
                reason: MoveRejection::Occupied,
            });
        }

        self.board.set(index, *player.marker()).map_err(|reason| {
            warn!(index, %reason, "Invalid move");
            EngineError::InvalidMove { index, reason }
        })?;
        info!(index, player = %player.name(), marker = %player.marker(), "Move applied");
        self.presenter.render_board(&self.board);

        if let Some((marker, line)) = rules::winning_line(&self.board) {
            return Ok(self.finish(Outcome::Won {
                winner: player.name().clone(),
                marker,
                line,
            }));
        }

        if self.check_draw() {
            return Ok(self.finish(Outcome::Draw));
        }

        self.current = 1 - self.current;
        self.announce_turn();
        let next = self
            .current_player()
            .cloned()
            .ok_or_else(|| self.invalid_state("play a turn"))?;
        Ok(TurnOutcome::Next(next))
    }

    /// Plays a uniformly random empty cell for the current player.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn computer_move(&mut self) -> Result<TurnOutcome, EngineError> {
        if self.phase != Phase::InProgress {
            return Err(self.invalid_state("make a computer move"));
        }
        let index =
            computer::pick_move(&self.board, &mut self.rng).ok_or(EngineError::NoEmptyCells)?;
        self.play_turn(index)
    }

    /// Plays a computer move only if `game_id` is still the active game.
    #[instrument(skip(self))]
    pub fn computer_move_for(&mut self, game_id: u64) -> Result<TurnOutcome, EngineError> {
        if game_id != self.game_id {
            return Err(EngineError::StaleComputerMove {
                scheduled_for: game_id,
                current: self.game_id,
            });
        }
        self.computer_move()
    }

    /// Clears the board without touching players or phase.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.reset();
    }

    /// True iff some line holds three identical markers.
    pub fn check_win(&self) -> bool {
        rules::check_win(&self.board)
    }

    /// True iff every cell is marked.
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// True when the game is in progress and a computer is to move.
    pub fn computer_to_move(&self) -> bool {
        self.phase == Phase::InProgress && self.current_player().is_some_and(Player::is_computer)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns all nine cells.
    pub fn cells(&self) -> &[Cell; 9] {
        self.board.get()
    }

    /// Returns player 1 and player 2, once a game has started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the player whose move is expected next.
    ///
    /// After the game ends this is the player who made the final move.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current])
    }

    /// Returns the current player's display name.
    pub fn current_player_name(&self) -> Option<&str> {
        self.current_player().map(|player| player.name().as_str())
    }

    /// Returns the phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the end-of-game message once the game has ended.
    pub fn message(&self) -> Option<String> {
        match &self.phase {
            Phase::Ended(outcome) => Some(outcome.message()),
            Phase::NotStarted | Phase::InProgress => None,
        }
    }

    /// Identifier of the current game; increments on every start.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Captures the state for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.game_id,
            phase: self.phase.label().to_string(),
            cells: *self.board.get(),
            players: self.players.iter().flatten().cloned().collect(),
            current_player: self.current_player_name().map(str::to_string),
            message: self.message(),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> TurnOutcome {
        let message = outcome.message();
        info!(game_id = self.game_id, %message, "Game over");
        self.phase = Phase::Ended(outcome.clone());
        self.presenter.end_game(&message);
        TurnOutcome::Finished(outcome)
    }

    fn announce_turn(&mut self) {
        let Some(players) = &self.players else {
            return;
        };
        let player = &players[self.current];
        self.presenter.display_turn(player);
        if player.is_computer() {
            debug!(player = %player.name(), "Computer to move");
            self.presenter.computer_pending(player);
        }
    }

    fn invalid_state(&self, operation: &'static str) -> EngineError {
        EngineError::InvalidState {
            operation,
            phase: self.phase.label(),
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("game_id", &self.game_id)
            .field("phase", &self.phase)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}
