//! Shared handle to the one game engine.

use std::sync::Arc;
use tictactoe_engine::{GameEngine, GameState, MoveError};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Cloneable handle to the process-wide game.
///
/// All clones point at the same engine. Each operation holds the lock for
/// its whole read-modify-write, so concurrent requests never interleave
/// board updates.
#[derive(Debug, Clone, Default)]
pub struct GameService {
    engine: Arc<Mutex<GameEngine>>,
}

impl GameService {
    /// Creates a service around a new engine.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game service");
        Self {
            engine: Arc::new(Mutex::new(GameEngine::new())),
        }
    }

    /// Replaces the game with a fresh one and returns it.
    #[instrument(skip(self))]
    pub async fn fresh_state(&self) -> GameState {
        let mut engine = self.engine.lock().await;
        engine.fresh_state()
    }

    /// Returns the current state without modifying it.
    #[instrument(skip(self))]
    pub async fn peek(&self) -> GameState {
        let engine = self.engine.lock().await;
        engine.peek()
    }

    /// Applies a move for whoever is on turn.
    #[instrument(skip(self))]
    pub async fn apply_move(&self, row: i64, col: i64) -> Result<GameState, MoveError> {
        let mut engine = self.engine.lock().await;
        match engine.apply_move(row, col) {
            Ok(state) => {
                debug!(status = ?state.status(), "Move accepted");
                Ok(state)
            }
            Err(e) => {
                warn!(row, col, error = %e, "Move rejected");
                Err(e)
            }
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> GameState {
        let mut engine = self.engine.lock().await;
        engine.reset()
    }
}
