//! Core domain types
//!
//! The vocabulary of the game: validated words, per-cell feedback states,
//! the duplicate-aware scoring algorithm and the per-board letter feedback map.

mod feedback;
mod word;

pub use feedback::{CellState, LetterFeedback, score_guess};
pub use word::{Word, WordError};

/// Number of letters in a word (and columns in a board row)
pub const WORD_LEN: usize = 5;
