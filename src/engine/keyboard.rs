//! Cross-board keyboard state
//!
//! The aggregator keeps the last feedback map each board reported and
//! nothing else. It never merges board opinions: a key's rendering is a
//! fan-out of four independent per-board states, one per quadrant.

use crate::core::{CellState, LetterFeedback};

/// Number of boards sharing the keyboard
pub const BOARD_COUNT: usize = 4;

/// Last-known letter feedback per board slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardAggregator {
    maps: [LetterFeedback; BOARD_COUNT],
}

impl KeyboardAggregator {
    /// Replace a board slot's map with a freshly reported one
    ///
    /// # Panics
    /// Panics if `board >= BOARD_COUNT`.
    pub fn report(&mut self, board: usize, map: LetterFeedback) {
        self.maps[board] = map;
    }

    /// Per-board states for one key, in board slot order
    ///
    /// Derived statelessly from the stored maps; boards with no opinion on
    /// the letter contribute `Empty`.
    #[must_use]
    pub fn key_quadrants(&self, letter: u8) -> [CellState; BOARD_COUNT] {
        std::array::from_fn(|board| self.maps[board].get(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState::{Absent, Correct, Empty, Present};

    #[test]
    fn default_reports_empty_everywhere() {
        let agg = KeyboardAggregator::default();

        for letter in b'a'..=b'z' {
            assert_eq!(agg.key_quadrants(letter), [Empty; BOARD_COUNT]);
        }
    }

    #[test]
    fn quadrant_reflects_only_its_own_board() {
        let mut agg = KeyboardAggregator::default();

        let mut map0 = LetterFeedback::default();
        map0.record(b'e', Correct);
        let mut map1 = LetterFeedback::default();
        map1.record(b'e', Absent);

        agg.report(0, map0);
        agg.report(1, map1);

        assert_eq!(agg.key_quadrants(b'e'), [Correct, Absent, Empty, Empty]);
    }

    #[test]
    fn reporting_one_board_never_changes_another_quadrant() {
        let mut agg = KeyboardAggregator::default();

        let mut map1 = LetterFeedback::default();
        map1.record(b's', Present);
        agg.report(1, map1);
        let before = agg.key_quadrants(b's')[1];

        // Board 0 churns through several reports; board 1's quadrant holds.
        for state in [Absent, Present, Correct] {
            let mut map0 = LetterFeedback::default();
            map0.record(b's', state);
            agg.report(0, map0);
            assert_eq!(agg.key_quadrants(b's')[1], before);
        }
    }

    #[test]
    fn rederivation_is_idempotent() {
        let mut agg = KeyboardAggregator::default();
        let mut map = LetterFeedback::default();
        map.record(b'q', Present);
        map.record(b'w', Absent);
        agg.report(2, map);

        let first: Vec<_> = (b'a'..=b'z').map(|l| agg.key_quadrants(l)).collect();
        let second: Vec<_> = (b'a'..=b'z').map(|l| agg.key_quadrants(l)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fresh_report_replaces_slot_wholesale() {
        let mut agg = KeyboardAggregator::default();

        let mut old = LetterFeedback::default();
        old.record(b'a', Present);
        agg.report(3, old);

        // The replacement map is authoritative; the aggregator itself does
        // not accumulate. Monotonicity is the board's job.
        let fresh = LetterFeedback::default();
        agg.report(3, fresh);
        assert_eq!(agg.key_quadrants(b'a')[3], Empty);
    }
}
