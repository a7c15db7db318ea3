//! Game engine
//!
//! One `BoardEngine` per board, a `KeyboardAggregator` collecting each
//! board's letter feedback, and a `GameSession` that owns all of them and
//! routes logical key events.

mod board;
mod keyboard;
mod session;

pub use board::{BoardEngine, BoardSnapshot, Key, ROWS, Status};
pub use keyboard::{BOARD_COUNT, KeyboardAggregator};
pub use session::GameSession;
