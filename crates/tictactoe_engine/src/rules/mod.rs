//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls them
//! after every placement; they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line};
