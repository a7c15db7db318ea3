//! Game session: four boards, one key stream
//!
//! The session is the single routing point for logical key events. Each
//! event is handed to every board in slot order, one board fully processed
//! (mutation, recomputation, report) before the next; a board's row report
//! flows only into the keyboard aggregator, never to another board.

use rand::RngCore;

use super::board::{BoardEngine, Key};
use super::keyboard::{BOARD_COUNT, KeyboardAggregator};
use crate::wordlists::WordSource;

/// One game: four independently targeted boards and the shared keyboard state
pub struct GameSession<'a> {
    words: &'a dyn WordSource,
    boards: [BoardEngine; BOARD_COUNT],
    keyboard: KeyboardAggregator,
}

impl<'a> GameSession<'a> {
    /// Start a session, picking an independent random target per board
    pub fn new(words: &'a dyn WordSource, rng: &mut dyn RngCore) -> Self {
        let boards = std::array::from_fn(|_| BoardEngine::new(words.pick_target(rng)));

        Self {
            words,
            boards,
            keyboard: KeyboardAggregator::default(),
        }
    }

    /// Fan one logical key event out to every board
    ///
    /// Boards that are already terminal drop the event themselves; row
    /// reports are forwarded into the aggregator under the board's slot.
    pub fn handle_key(&mut self, key: Key) {
        for (slot, board) in self.boards.iter_mut().enumerate() {
            if let Some(report) = board.handle_key(key, self.words) {
                self.keyboard.report(slot, report);
            }
        }
    }

    /// One board, by slot index
    ///
    /// # Panics
    /// Panics if `slot >= BOARD_COUNT`.
    #[must_use]
    pub fn board(&self, slot: usize) -> &BoardEngine {
        &self.boards[slot]
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardAggregator {
        &self.keyboard
    }

    /// Whether every board has reached a terminal state
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.boards.iter().all(|b| !b.status().is_in_progress())
    }

    /// Number of boards won so far
    #[must_use]
    pub fn wins(&self) -> usize {
        self.boards
            .iter()
            .filter(|b| b.status() == super::board::Status::Won)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState::{Correct, Empty};
    use crate::core::Word;
    use crate::engine::board::Status;
    use rand::RngCore;

    /// Deterministic source: hands out targets round-robin, accepts anything
    struct FixedTargets(&'static [&'static str]);

    impl WordSource for FixedTargets {
        fn pick_target(&self, rng: &mut dyn RngCore) -> Word {
            let i = rng.next_u32() as usize % self.0.len();
            Word::new(self.0[i]).unwrap()
        }

        fn is_accepted_guess(&self, _guess: &str) -> bool {
            true
        }
    }

    /// Counter RNG so round-robin target picking is exact
    struct Counter(u32);

    impl RngCore for Counter {
        fn next_u32(&mut self) -> u32 {
            let v = self.0;
            self.0 += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    fn session(words: &FixedTargets) -> GameSession<'_> {
        GameSession::new(words, &mut Counter(0))
    }

    fn play_word(s: &mut GameSession<'_>, word: &str) {
        for c in word.chars() {
            s.handle_key(Key::Letter(c));
        }
        s.handle_key(Key::Enter);
    }

    #[test]
    fn boards_get_independent_targets() {
        let words = FixedTargets(&["speed", "erase", "crane", "slate"]);
        let s = session(&words);

        assert_eq!(s.board(0).target().text(), "speed");
        assert_eq!(s.board(1).target().text(), "erase");
        assert_eq!(s.board(2).target().text(), "crane");
        assert_eq!(s.board(3).target().text(), "slate");
    }

    #[test]
    fn key_events_fan_out_to_every_board() {
        let words = FixedTargets(&["speed", "erase", "crane", "slate"]);
        let mut s = session(&words);

        s.handle_key(Key::Letter('q'));
        for slot in 0..BOARD_COUNT {
            assert_eq!(s.board(slot).cursor(), (0, 1));
            assert_eq!(s.board(slot).snapshot().grid[0][0], Some('Q'));
        }
    }

    #[test]
    fn submission_reports_land_in_matching_slots() {
        let words = FixedTargets(&["speed", "erase", "crane", "slate"]);
        let mut s = session(&words);

        play_word(&mut s, "speed");

        // Board 0 guessed its own word; every quadrant for S reflects only
        // that board's independent evaluation of the same guess.
        assert_eq!(s.board(0).status(), Status::Won);
        let quadrants = s.keyboard().key_quadrants(b's');
        assert_eq!(quadrants[0], Correct);
        assert_eq!(quadrants[3], Correct); // SLATE also starts with S
        assert_ne!(quadrants[1], Empty);
        assert_ne!(quadrants[2], Empty);
    }

    #[test]
    fn finished_board_stops_consuming_while_others_continue() {
        let words = FixedTargets(&["speed", "erase", "crane", "slate"]);
        let mut s = session(&words);

        play_word(&mut s, "speed");
        assert_eq!(s.board(0).status(), Status::Won);

        play_word(&mut s, "erase");
        // Board 0 is terminal and untouched; board 1 won on its word.
        assert_eq!(s.board(0).cursor(), (1, 0));
        assert_eq!(s.board(1).status(), Status::Won);
        assert_eq!(s.board(2).cursor(), (2, 0));
    }

    #[test]
    fn session_is_over_when_all_boards_are_terminal() {
        let words = FixedTargets(&["speed", "speed", "speed", "speed"]);
        let mut s = session(&words);

        assert!(!s.is_over());
        play_word(&mut s, "speed");
        assert!(s.is_over());
        assert_eq!(s.wins(), BOARD_COUNT);
    }
}
