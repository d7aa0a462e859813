//! Tic-tac-toe engine for a single shared board.
//!
//! The engine owns exactly one [`GameState`] and enforces the rules:
//! move validation, win and draw detection, and turn alternation.
//! It performs no I/O; callers that share it between requests are
//! responsible for serializing access.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! let state = engine.apply_move(1, 1).unwrap();
//! assert_eq!(state.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use error::MoveError;
pub use position::Position;
pub use types::{Board, Cell, GameState, GameStatus, Player};
