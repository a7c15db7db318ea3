//! Guess scoring and letter feedback
//!
//! Scoring uses the classic two-pass duplicate-aware algorithm:
//! - Pass 1: mark exact position matches `Correct` and consume that letter
//!   from a remaining-count table built from the target's letter multiset.
//! - Pass 2: left to right, mark `Present` where the table still has the
//!   letter, `Absent` otherwise.
//!
//! The passes are strictly sequential, so for any letter the total number of
//! `Correct` + `Present` cells never exceeds its multiplicity in the target.

use super::{WORD_LEN, Word};

/// State of one grid cell (and, aggregated, of one keyboard letter)
///
/// Ordered by feedback priority: `Correct > Present > Absent > Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Unfilled / no information yet (rendered white)
    #[default]
    Empty,
    /// Letter is not in the target (or all its copies are accounted for)
    Absent,
    /// Letter is in the target at a different position
    Present,
    /// Letter is in the target at this position
    Correct,
}

impl CellState {
    /// Feedback priority: higher rank wins when states are aggregated
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }
}

/// Score a guess against a target word
///
/// Returns one `CellState` per position; no position is left `Empty`.
///
/// # Examples
/// ```
/// use quadle::core::{CellState, Word, score_guess};
///
/// let guess = Word::new("erase").unwrap();
/// let target = Word::new("speed").unwrap();
/// let states = score_guess(&guess, &target);
///
/// use quadle::core::CellState::{Absent, Present};
/// assert_eq!(states, [Present, Absent, Absent, Present, Present]);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, target: &Word) -> [CellState; WORD_LEN] {
    let mut result = [CellState::Empty; WORD_LEN];
    let mut remaining = target.char_counts();

    // First pass: exact position matches
    // Allow: Index needed to compare guess[i] with target[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.chars()[i] == target.chars()[i] {
            result[i] = CellState::Correct;

            let letter = guess.chars()[i];
            if let Some(count) = remaining.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong-position matches from what the first pass left over
    // Allow: Index needed to check result[i] and access guess[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if result[i] == CellState::Correct {
            continue;
        }

        let letter = guess.chars()[i];
        if let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            result[i] = CellState::Present;
            *count -= 1;
        } else {
            result[i] = CellState::Absent;
        }
    }

    result
}

/// Best-known state per letter for one board
///
/// Accumulated monotonically: a letter's recorded state only ever moves up
/// the priority order, never down, even across multiple submitted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterFeedback {
    states: [CellState; 26],
}

impl LetterFeedback {
    /// Get the best-known state for a letter (`a`-`z`, either case)
    ///
    /// Letters outside the alphabet report `Empty`.
    #[must_use]
    pub fn get(&self, letter: u8) -> CellState {
        match Self::index(letter) {
            Some(i) => self.states[i],
            None => CellState::Empty,
        }
    }

    /// Record an observed state for a letter, keeping the higher-priority one
    ///
    /// Non-alphabetic input is ignored.
    pub fn record(&mut self, letter: u8, state: CellState) {
        if let Some(i) = Self::index(letter)
            && state.rank() > self.states[i].rank()
        {
            self.states[i] = state;
        }
    }

    /// Whether no letter has any feedback yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.iter().all(|&s| s == CellState::Empty)
    }

    fn index(letter: u8) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower.is_ascii_lowercase().then(|| usize::from(lower - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::CellState::{Absent, Correct, Empty, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn score_all_absent() {
        let states = score_guess(&word("abcde"), &word("fghij"));
        assert_eq!(states, [Absent; 5]);
    }

    #[test]
    fn score_exact_match_all_correct() {
        for w in ["crane", "slate", "aaaaa", "speed"] {
            assert_eq!(score_guess(&word(w), &word(w)), [Correct; 5]);
        }
    }

    #[test]
    fn score_erase_against_speed() {
        // Regression fixture for the two-pass algorithm. Target SPEED has
        // counts S:1 P:1 E:2 D:1; no position matches, so pass 2 resolves
        // E(present, e->1) R(absent) A(absent) S(present) E(present, e->0).
        let states = score_guess(&word("erase"), &word("speed"));
        assert_eq!(states, [Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn score_speed_against_erase() {
        // S(present) P(absent) E(present) E(present) D(absent):
        // ERASE has two E's, so both guessed E's resolve Present.
        let states = score_guess(&word("speed"), &word("erase"));
        assert_eq!(states, [Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn score_duplicate_green_consumes_count() {
        // ROBOT vs FLOOR: the second O is an exact match and consumes one O
        // in pass 1; the first O takes the remaining one as Present.
        let states = score_guess(&word("robot"), &word("floor"));
        assert_eq!(states, [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn score_extra_duplicates_go_absent() {
        // Guess has three E's, target EMBER only two: third E exceeds the
        // multiplicity and must be Absent.
        let states = score_guess(&word("eerie"), &word("ember"));
        assert_eq!(states[0], Correct);
        let e_marks = states
            .iter()
            .zip(word("eerie").chars())
            .filter(|&(s, &c)| c == b'e' && *s != Absent)
            .count();
        assert_eq!(e_marks, 2);
    }

    #[test]
    fn score_never_exceeds_target_multiplicity() {
        let pairs = [
            ("eerie", "ember"),
            ("erase", "speed"),
            ("allee", "llama"),
            ("aaaaa", "abaca"),
            ("mamma", "drama"),
        ];

        for (g, t) in pairs {
            let guess = word(g);
            let target = word(t);
            let states = score_guess(&guess, &target);

            for letter in b'a'..=b'z' {
                let marked = states
                    .iter()
                    .zip(guess.chars())
                    .filter(|&(s, &c)| c == letter && *s != Absent)
                    .count();
                let available =
                    usize::from(target.char_counts().get(&letter).copied().unwrap_or(0));
                assert!(
                    marked <= available,
                    "{g} vs {t}: letter {} marked {marked} times, only {available} available",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn cell_state_priority_order() {
        assert!(Correct.rank() > Present.rank());
        assert!(Present.rank() > Absent.rank());
        assert!(Absent.rank() > Empty.rank());
    }

    #[test]
    fn feedback_default_is_empty() {
        let fb = LetterFeedback::default();
        assert!(fb.is_empty());
        assert_eq!(fb.get(b'a'), Empty);
        assert_eq!(fb.get(b'z'), Empty);
    }

    #[test]
    fn feedback_records_and_upgrades() {
        let mut fb = LetterFeedback::default();
        fb.record(b'e', Absent);
        assert_eq!(fb.get(b'e'), Absent);

        fb.record(b'e', Present);
        assert_eq!(fb.get(b'e'), Present);

        fb.record(b'e', Correct);
        assert_eq!(fb.get(b'e'), Correct);
    }

    #[test]
    fn feedback_never_downgrades() {
        let mut fb = LetterFeedback::default();
        fb.record(b's', Correct);

        fb.record(b's', Present);
        fb.record(b's', Absent);
        fb.record(b's', Empty);
        assert_eq!(fb.get(b's'), Correct);
    }

    #[test]
    fn feedback_case_insensitive() {
        let mut fb = LetterFeedback::default();
        fb.record(b'Q', Present);
        assert_eq!(fb.get(b'q'), Present);
        assert_eq!(fb.get(b'Q'), Present);
    }

    #[test]
    fn feedback_ignores_non_letters() {
        let mut fb = LetterFeedback::default();
        fb.record(b'3', Correct);
        fb.record(b' ', Correct);
        assert!(fb.is_empty());
        assert_eq!(fb.get(b'!'), Empty);
    }
}
