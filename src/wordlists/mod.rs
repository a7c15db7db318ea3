//! Word lists and target selection
//!
//! The game's word source: an answer list that targets are drawn from, plus
//! a larger accepted-guess set (valid-guess list ∪ answer list) that gates
//! row submission.

use crate::core::Word;
use rand::RngCore;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

mod embedded;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VALID, VALID_COUNT};

/// Supplier of secret words and the guess-validity predicate
///
/// Boards never see the lists themselves, only this contract.
pub trait WordSource {
    /// Pick a target word for a new board
    fn pick_target(&self, rng: &mut dyn RngCore) -> Word;

    /// Whether a guess is accepted for submission (case-insensitive)
    fn is_accepted_guess(&self, guess: &str) -> bool;
}

/// Word lists backing the game
///
/// Targets come from the answer list; guesses are checked against the union
/// of both lists.
pub struct WordList {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from answer words and extra accepted guesses
    ///
    /// # Errors
    /// Returns `InvalidData` if the answer list is empty, since a board
    /// cannot be created without a target to pick.
    pub fn new(answers: Vec<Word>, valid: Vec<Word>) -> io::Result<Self> {
        if answers.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "answer list contains no valid words",
            ));
        }

        let accepted = answers
            .iter()
            .chain(valid.iter())
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self { answers, accepted })
    }

    /// The word lists compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded answer list is never empty.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(VALID))
            .expect("embedded answer list is not empty")
    }

    /// Load word lists from files, one word per line
    ///
    /// Invalid lines are skipped, matching the embedded-list behavior.
    ///
    /// # Errors
    /// Returns an I/O error if either file cannot be read, or `InvalidData`
    /// if the answers file yields no usable words.
    pub fn from_files<P: AsRef<Path>>(answers_path: P, valid_path: P) -> io::Result<Self> {
        let answers = load_from_file(answers_path)?;
        let valid = load_from_file(valid_path)?;
        Self::new(answers, valid)
    }

}

impl WordSource for WordList {
    fn pick_target(&self, rng: &mut dyn RngCore) -> Word {
        self.answers
            .choose(rng)
            .cloned()
            .expect("answer list is non-empty by construction")
    }

    fn is_accepted_guess(&self, guess: &str) -> bool {
        self.accepted.contains(&guess.to_lowercase())
    }
}

/// Load words from a file, skipping blank and invalid lines
///
/// # Errors
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slices to Word values
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
