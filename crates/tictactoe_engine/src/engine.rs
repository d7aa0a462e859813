//! The game engine: owner of the one game state.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, GameState};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Holds a single [`GameState`]. Every operation takes `&mut self`, so a
/// shared engine must sit behind a lock or an owning task.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state without touching it.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a copy of the current state with no side effect.
    #[instrument(skip(self))]
    pub fn peek(&self) -> GameState {
        self.state.clone()
    }

    /// Discards whatever game is in progress and starts a new one.
    #[instrument(skip(self))]
    pub fn fresh_state(&mut self) -> GameState {
        debug!(previous = ?self.state.status(), "Replacing game state");
        self.state = GameState::new();
        self.state.clone()
    }

    /// Starts a new game. Same as [`GameEngine::fresh_state`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        info!("Resetting game");
        self.fresh_state()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks run in order: game over, coordinates in range, cell empty.
    /// A rejected move leaves the state untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<GameState, MoveError> {
        if self.state.is_terminal() {
            debug!(status = ?self.state.status(), "Move rejected, game over");
            return Err(MoveError::GameEnded);
        }
        let pos = Position::from_coords(row, col)?;
        self.place(pos)?;
        Ok(self.state.clone())
    }

    /// Places the current player's mark at an already validated position.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) -> Result<&GameState, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameEnded);
        }
        if !self.state.board().is_empty(pos) {
            debug!(%pos, "Move rejected, cell occupied");
            return Err(MoveError::CellOccupied);
        }

        let player = self.state.current_player();
        self.state.board_mut().set(pos, Cell::from(player));

        // Only the mover can have completed a line. Win is checked before
        // draw so a full winning board counts as a win.
        if rules::has_line(self.state.board(), player) {
            self.state.set_winner(player);
        } else if rules::is_full(self.state.board()) {
            self.state.set_draw();
        } else {
            self.state.pass_turn();
        }

        info!(
            %pos,
            %player,
            status = ?self.state.status(),
            "Move applied"
        );
        debug!(board = %self.state.board().display(), "Board after move");
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Player};

    #[test]
    fn test_first_move_passes_turn() {
        let mut engine = GameEngine::new();
        let state = engine.apply_move(0, 0).unwrap();
        assert_eq!(state.board().get(Position::TopLeft), Cell::X);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut engine = GameEngine::new();
        engine.apply_move(1, 1).unwrap();
        let before = engine.peek();

        assert_eq!(engine.apply_move(1, 1), Err(MoveError::CellOccupied));
        assert_eq!(
            engine.apply_move(5, 1),
            Err(MoveError::OutOfRange { row: 5, col: 1 })
        );
        assert_eq!(engine.peek(), before);
    }

    #[test]
    fn test_game_ended_checked_before_range() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.apply_move(row, col).unwrap();
        }
        assert_eq!(engine.apply_move(-7, 42), Err(MoveError::GameEnded));
        assert_eq!(engine.apply_move(0, 0), Err(MoveError::GameEnded));
        assert_eq!(engine.place(Position::BottomRight), Err(MoveError::GameEnded));
    }

    #[test]
    fn test_winning_move_keeps_mover_as_current_player() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            engine.apply_move(row, col).unwrap();
        }
        let state = engine.apply_move(0, 2).unwrap();
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.is_draw());
    }

    #[test]
    fn test_peek_has_no_side_effect() {
        let mut engine = GameEngine::new();
        engine.apply_move(2, 2).unwrap();
        let first = engine.peek();
        let second = engine.peek();
        assert_eq!(first, second);
        assert_eq!(first.board().get(Position::BottomRight), Cell::X);
    }

    #[test]
    fn test_fresh_state_discards_game() {
        let mut engine = GameEngine::new();
        engine.apply_move(2, 2).unwrap();
        let state = engine.fresh_state();
        assert_eq!(state, GameState::new());
        assert_eq!(engine.state(), &GameState::new());
    }
}
