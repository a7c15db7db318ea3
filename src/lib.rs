//! Quadle
//!
//! Four simultaneous Wordle boards sharing one keyboard. Every key press is
//! fanned out to each in-progress board; each board scores guesses against
//! its own hidden target, and the keyboard shows all four verdicts per key.
//!
//! # Quick Start
//!
//! ```rust
//! use quadle::core::{CellState, Word, score_guess};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let states = score_guess(&guess, &target);
//! assert_eq!(states[2], CellState::Correct); // A in the right spot
//! ```

// Core domain types
pub mod core;

// Board state machine, keyboard aggregation, session routing
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
