//! Game sessions on the async event loop.
//!
//! A [`GameSession`] wraps one [`GameEngine`] and runs deferred computer moves
//! as tokio tasks. Starting or restarting a game aborts any pending move, as
//! does dropping the last handle to the session. Every move carries the id of the game it was scheduled for, so a stale move
//! can never land on a fresh board.

use crate::games::tictactoe::{
    EngineError, GameEngine, GameSnapshot, Position, Seat, TurnOutcome,
};
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

#[derive(Debug)]
struct SessionState {
    engine: GameEngine,
    pending: Option<JoinHandle<()>>,
}

impl SessionState {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!(game_id = self.engine.game_id(), "Cancelling pending computer move");
            handle.abort();
        }
    }
}

impl Drop for SessionState {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// A single game driven from the event loop.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    state: Arc<Mutex<SessionState>>,
}

impl GameSession {
    /// Creates a new game session around `engine`.
    #[instrument(skip(engine))]
    pub fn new(id: SessionId, engine: GameEngine) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            state: Arc::new(Mutex::new(SessionState {
                engine,
                pending: None,
            })),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Starts a new game, cancelling any pending computer move.
    #[instrument(skip_all, fields(session_id = %self.id))]
    pub async fn start_game(&self, first: impl Into<Seat>, second: impl Into<Seat>) {
        let mut state = self.state.lock().await;
        state.cancel_pending();
        state.engine.start_game(first, second);
        schedule_computer_move(&self.state, &mut state);
    }

    /// Restarts with the same players, cancelling any pending computer move.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn restart(&self) -> Result<(), EngineError> {
        let mut state = self.state.lock().await;
        state.cancel_pending();
        state.engine.restart()?;
        schedule_computer_move(&self.state, &mut state);
        Ok(())
    }

    /// Plays a move for the current player.
    ///
    /// An accepted move supersedes any computer move still pending.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn play_turn(&self, index: usize) -> Result<TurnOutcome, EngineError> {
        let mut state = self.state.lock().await;
        let outcome = state.engine.play_turn(index)?;
        state.cancel_pending();
        schedule_computer_move(&self.state, &mut state);
        Ok(outcome)
    }

    /// Clears the board only; players, phase and pending moves are kept.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn reset_board(&self) {
        self.state.lock().await.engine.reset_board();
    }

    /// Aborts a scheduled computer move, if any.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn cancel_pending(&self) {
        self.state.lock().await.cancel_pending();
    }

    /// Returns true while a computer move is scheduled.
    pub async fn has_pending_computer_move(&self) -> bool {
        self.state
            .lock()
            .await
            .pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// True when the game is waiting on the computer.
    pub async fn computer_to_move(&self) -> bool {
        self.state.lock().await.engine.computer_to_move()
    }

    /// Cells the current player can mark without overwriting.
    pub async fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.state.lock().await.engine.board())
    }

    /// Captures the current game state.
    pub async fn snapshot(&self) -> GameSnapshot {
        self.state.lock().await.engine.snapshot()
    }
}

/// Spawns the deferred computer move when the engine is waiting on one.
///
/// The spawned task re-schedules after moving, so computer-vs-computer games
/// play themselves out. It only holds a weak reference to the session state.
fn schedule_computer_move(shared: &Arc<Mutex<SessionState>>, state: &mut SessionState) {
    if !state.engine.computer_to_move() {
        return;
    }
    let game_id = state.engine.game_id();
    let delay = state.engine.config().computer_delay();
    debug!(game_id, delay_ms = delay.as_millis() as u64, "Scheduling computer move");

    let session: Weak<Mutex<SessionState>> = Arc::downgrade(shared);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(shared) = session.upgrade() else {
            debug!(game_id, "Session dropped before computer move");
            return;
        };
        let mut state = shared.lock().await;
        state.pending = None;
        match state.engine.computer_move_for(game_id) {
            Ok(outcome) => debug!(game_id, ?outcome, "Computer moved"),
            Err(e) => {
                warn!(game_id, error = %e, "Computer move discarded");
                return;
            }
        }
        schedule_computer_move(&shared, &mut state);
    });

    state.cancel_pending();
    state.pending = Some(handle);
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    /// Creates a new game session.
    #[instrument(skip(self, engine))]
    pub async fn create_session(
        &self,
        id: SessionId,
        engine: GameEngine,
    ) -> Result<GameSession, SessionError> {
        let mut sessions = self.sessions.lock().await;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        let session = GameSession::new(id.clone(), engine);
        sessions.insert(id.clone(), session.clone());

        info!(session_id = %id, "Created new session");
        Ok(session)
    }

    /// Gets a session by ID.
    #[instrument(skip(self))]
    pub async fn get_session(&self, id: &str) -> Option<GameSession> {
        let session = self.sessions.lock().await.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Removes a session, cancelling its pending computer move.
    #[instrument(skip(self))]
    pub async fn remove_session(&self, id: &str) -> Option<GameSession> {
        let session = self.sessions.lock().await.remove(id)?;
        session.cancel_pending().await;
        info!(session_id = id, "Removed session");
        Some(session)
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub async fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.lock().await.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}

/// Session management error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A session with this id is already registered.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),
}

impl std::error::Error for SessionError {}
