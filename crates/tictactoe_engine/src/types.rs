//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
///
/// Serialized as `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    #[serde(rename = "")]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board, serialized as nested rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based index so a reader can name them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (row * 3 + col + 1).to_string(),
                    Cell::X => "X".to_string(),
                    Cell::O => "O".to_string(),
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

/// Summary of where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state, in the shape served over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    winner: Option<Player>,
    is_draw: bool,
    current_player: Player,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            winner: None,
            is_draw: false,
            current_player: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true if the board filled up without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns the player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_winner(&mut self, player: Player) {
        self.winner = Some(player);
    }

    pub(crate) fn set_draw(&mut self) {
        self.is_draw = true;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_serializes_like_the_wire_format() {
        let json = serde_json::to_value(GameState::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "board": [["", "", ""], ["", "", ""], ["", "", ""]],
                "winner": null,
                "is_draw": false,
                "current_player": "X",
            })
        );
    }

    #[test]
    fn test_cells_serialize_as_marks() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::X);
        board.set(Position::Center, Cell::O);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!([["X", "", ""], ["", "O", ""], ["", "", ""]])
        );
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::X);
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_reflects_terminal_flags() {
        let mut state = GameState::new();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());

        state.set_winner(Player::O);
        assert_eq!(state.status(), GameStatus::Won(Player::O));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
