//! Single-board state machine
//!
//! A board owns a 9x5 grid, a cursor, a target word and the feedback derived
//! from submitted rows. It consumes logical key events and is the only thing
//! that mutates its own state; everything it exposes outward is a value
//! snapshot or a copied feedback map.

use crate::core::{CellState, LetterFeedback, WORD_LEN, Word, score_guess};
use crate::wordlists::WordSource;

/// Number of guess rows per board
pub const ROWS: usize = 9;

/// A logical key event, identical whether it came from a physical key press
/// or an on-screen key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A letter A-Z (either case)
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Map a character to a letter key event, if it is one
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then_some(Self::Letter(c))
    }
}

/// Board lifecycle state; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Whether the board still accepts key events
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// Immutable view of a board for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Letters typed so far, uppercase; `None` for unfilled cells
    pub grid: [[Option<char>; WORD_LEN]; ROWS],
    /// Colors of submitted cells; `Empty` for everything else
    pub cell_states: [[CellState; WORD_LEN]; ROWS],
    pub status: Status,
    /// Transient message ("NOT A VALID WORD", win/loss text, or empty)
    pub message: String,
    pub active_row: usize,
    pub active_col: usize,
}

/// One board's full state machine
pub struct BoardEngine {
    target: Word,
    grid: [[Option<char>; WORD_LEN]; ROWS],
    cell_states: [[CellState; WORD_LEN]; ROWS],
    active_row: usize,
    active_col: usize,
    status: Status,
    message: String,
    feedback: LetterFeedback,
}

impl BoardEngine {
    /// Create a board with the given target word
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            grid: [[None; WORD_LEN]; ROWS],
            cell_states: [[CellState::Empty; WORD_LEN]; ROWS],
            active_row: 0,
            active_col: 0,
            status: Status::InProgress,
            message: String::new(),
            feedback: LetterFeedback::default(),
        }
    }

    /// Process one logical key event
    ///
    /// Returns the recomputed letter feedback map when a row was submitted,
    /// `None` otherwise. Events that violate a precondition (full row, empty
    /// row, short row on Enter, terminal state) are silently ignored; an
    /// invalid word on Enter only sets the transient message.
    pub fn handle_key(&mut self, key: Key, words: &dyn WordSource) -> Option<LetterFeedback> {
        if !self.status.is_in_progress() {
            return None;
        }

        match key {
            Key::Letter(c) => {
                if self.active_col < WORD_LEN {
                    self.grid[self.active_row][self.active_col] = Some(c.to_ascii_uppercase());
                    self.active_col += 1;
                }
                None
            }
            Key::Backspace => {
                if self.active_col > 0 {
                    self.active_col -= 1;
                    self.grid[self.active_row][self.active_col] = None;
                }
                None
            }
            Key::Enter => {
                if self.active_col == WORD_LEN {
                    self.submit_row(words)
                } else {
                    None
                }
            }
        }
    }

    /// Evaluate the completed active row
    fn submit_row(&mut self, words: &dyn WordSource) -> Option<LetterFeedback> {
        let text = self.row_text(self.active_row);

        if !words.is_accepted_guess(&text) {
            self.message = "NOT A VALID WORD".to_string();
            return None;
        }

        // Row letters are always A-Z, so this only fails on a logic error;
        // treat that like any other malformed event and drop it.
        let guess = Word::new(&text).ok()?;

        self.message.clear();
        self.cell_states[self.active_row] = score_guess(&guess, &self.target);

        if guess == self.target {
            self.status = Status::Won;
            self.message = "YOU GOT THE WORD!".to_string();
        } else if self.active_row == ROWS - 1 {
            self.status = Status::Lost;
            self.message = format!("{} WAS THE WORD", self.target.text().to_uppercase());
        }

        // Rebuilt from the entire submitted history, not just this row, so
        // the map stays monotonic under the priority order.
        self.feedback = self.rebuild_feedback();

        self.active_row += 1;
        self.active_col = 0;

        Some(self.feedback)
    }

    fn row_text(&self, row: usize) -> String {
        self.grid[row]
            .iter()
            .flatten()
            .map(char::to_ascii_lowercase)
            .collect()
    }

    fn rebuild_feedback(&self) -> LetterFeedback {
        let mut feedback = LetterFeedback::default();

        // Unsubmitted cells carry CellState::Empty, which record() ignores,
        // so scanning the whole grid only picks up submitted rows.
        for row in 0..ROWS {
            for col in 0..WORD_LEN {
                if let Some(letter) = self.grid[row][col] {
                    feedback.record(letter.to_ascii_lowercase() as u8, self.cell_states[row][col]);
                }
            }
        }

        feedback
    }

    /// The board's secret word
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current transient message, possibly empty
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Best-known per-letter feedback across all submitted rows
    #[must_use]
    pub fn feedback(&self) -> LetterFeedback {
        self.feedback
    }

    /// Cursor position as (`active_row`, `active_col`)
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.active_row, self.active_col)
    }

    /// Immutable snapshot of everything the rendering layer needs
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: self.grid,
            cell_states: self.cell_states,
            status: self.status,
            message: self.message.clone(),
            active_row: self.active_row,
            active_col: self.active_col,
        }
    }
}
