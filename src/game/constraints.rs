//! Cumulative letter constraints derived from past guesses
//!
//! Every submitted guess narrows the search space. The constraint set keeps
//! that knowledge in four parts: letters known to be in the answer, letters
//! known to be absent, positions confirmed exact, and per-position letter
//! exclusions. Accumulation is monotonic; nothing is ever removed.

use crate::core::{Verdict, VerdictSequence, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Everything learned about the answer from the attempts made so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    required: FxHashSet<char>,
    excluded: FxHashSet<char>,
    fixed: FxHashMap<usize, char>,
    excluded_at: [FxHashSet<char>; WORD_LENGTH],
}

impl ConstraintSet {
    /// Create an empty constraint set (a fresh session)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its verdicts into the accumulated constraints
    ///
    /// - Exact: the letter is required and fixed at its position.
    /// - Present: the letter is required but excluded at its position.
    /// - Absent: the letter is excluded globally, unless some occurrence of
    ///   it was Exact or Present in this same sequence, or it is already
    ///   known required. A guess with more copies of a letter than the
    ///   answer gets Absent on the surplus copies only; excluding the letter
    ///   outright would contradict the earlier marks.
    pub fn update(&mut self, guess: &Word, verdicts: &VerdictSequence) {
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            match verdicts.at(i) {
                Verdict::Exact => {
                    self.required.insert(letter);
                    self.fixed.insert(i, letter);
                }
                Verdict::Present => {
                    self.required.insert(letter);
                    self.excluded_at[i].insert(letter);
                }
                Verdict::Absent => {}
            }
        }

        // Absent letters second: by now every Exact/Present letter of this
        // sequence is in `required`, which is exactly the guard we need.
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if verdicts.at(i) == Verdict::Absent && !self.required.contains(&letter) {
                self.excluded.insert(letter);
            }
        }
    }

    /// Check whether a dictionary word is consistent with every constraint
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        if !self.required.iter().all(|&l| word.contains(l)) {
            return false;
        }

        if self.excluded.iter().any(|&l| word.contains(l)) {
            return false;
        }

        for (&position, &letter) in &self.fixed {
            if word.letter_at(position) != letter {
                return false;
            }
        }

        for (position, forbidden) in self.excluded_at.iter().enumerate() {
            if forbidden.contains(&word.letter_at(position)) {
                return false;
            }
        }

        true
    }

    /// Letters known to appear somewhere in the answer
    #[must_use]
    pub fn required_letters(&self) -> &FxHashSet<char> {
        &self.required
    }

    /// Letters known to be entirely absent from the answer
    #[must_use]
    pub fn excluded_letters(&self) -> &FxHashSet<char> {
        &self.excluded
    }

    /// Positions confirmed exact
    #[must_use]
    pub fn fixed_positions(&self) -> &FxHashMap<usize, char> {
        &self.fixed
    }

    /// Letters known wrong at a given position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> &FxHashSet<char> {
        &self.excluded_at[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VerdictSequence;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn updated(constraints: &mut ConstraintSet, guess: &str, answer: &str) {
        let guess = word(guess);
        let verdicts = VerdictSequence::analyze(&guess, &word(answer));
        constraints.update(&guess, &verdicts);
    }

    #[test]
    fn exact_fixes_position_and_requires_letter() {
        let mut constraints = ConstraintSet::new();
        updated(&mut constraints, "стуль", "столи");

        // с, т, л exact at 0, 1, 3
        assert_eq!(constraints.fixed_positions().get(&0), Some(&'с'));
        assert_eq!(constraints.fixed_positions().get(&1), Some(&'т'));
        assert_eq!(constraints.fixed_positions().get(&3), Some(&'л'));
        assert!(constraints.required_letters().contains(&'с'));
        assert!(constraints.required_letters().contains(&'л'));
    }

    #[test]
    fn present_requires_letter_and_excludes_position() {
        let mut constraints = ConstraintSet::new();
        updated(&mut constraints, "слони", "столи");

        // л is Present at guess position 1
        assert!(constraints.required_letters().contains(&'л'));
        assert!(constraints.excluded_at(1).contains(&'л'));
        assert!(!constraints.excluded_letters().contains(&'л'));
    }

    #[test]
    fn absent_excludes_letter_globally() {
        let mut constraints = ConstraintSet::new();
        updated(&mut constraints, "стуль", "столи");

        assert!(constraints.excluded_letters().contains(&'у'));
        assert!(constraints.excluded_letters().contains(&'ь'));
    }

    #[test]
    fn fixed_letters_are_always_required() {
        let mut constraints = ConstraintSet::new();
        updated(&mut constraints, "стуль", "столи");
        updated(&mut constraints, "слони", "столи");

        for letter in constraints.fixed_positions().values() {
            assert!(constraints.required_letters().contains(letter));
        }
    }

    #[test]
    fn surplus_duplicate_is_not_excluded_globally() {
        // Guess has three 'а', answer has one (exact at position 4). The two
        // surplus 'а' positions are Absent but 'а' must stay required.
        let mut constraints = ConstraintSet::new();
        updated(&mut constraints, "анала", "стола");

        assert!(constraints.required_letters().contains(&'а'));
        assert!(!constraints.excluded_letters().contains(&'а'));
        // The genuinely missing letter is excluded as usual
        assert!(constraints.excluded_letters().contains(&'н'));
    }

    #[test]
    fn letter_required_by_earlier_attempt_is_never_excluded() {
        let mut constraints = ConstraintSet::new();
        // First attempt proves 'л' is in the answer
        updated(&mut constraints, "слони", "столи");
        assert!(constraints.required_letters().contains(&'л'));

        // A later guess where the only 'л' lands on a consumed duplicate
        // must not flip it to excluded. Construct the verdicts directly
        // against the same answer; 'л' is Exact there, so this mainly guards
        // the required-set check ordering.
        updated(&mut constraints, "стуль", "столи");
        assert!(!constraints.excluded_letters().contains(&'л'));
    }

    #[test]
    fn update_is_monotonic() {
        let mut constraints = ConstraintSet::new();
        updated(&mut constraints, "стуль", "столи");
        let before = constraints.clone();

        updated(&mut constraints, "слони", "столи");

        assert!(
            before
                .required_letters()
                .is_subset(constraints.required_letters())
        );
        assert!(
            before
                .excluded_letters()
                .is_subset(constraints.excluded_letters())
        );
        for (position, letter) in before.fixed_positions() {
            assert_eq!(constraints.fixed_positions().get(position), Some(letter));
        }
        for position in 0..WORD_LENGTH {
            assert!(
                before
                    .excluded_at(position)
                    .is_subset(constraints.excluded_at(position))
            );
        }
    }

    #[test]
    fn allows_respects_required_letters() {
        let mut constraints = ConstraintSet::new();
        constraints.required.insert('к');

        assert!(constraints.allows(&word("книга")));
        assert!(!constraints.allows(&word("дверь")));
    }

    #[test]
    fn allows_respects_excluded_letters() {
        let mut constraints = ConstraintSet::new();
        constraints.excluded.insert('к');

        assert!(!constraints.allows(&word("книга")));
        assert!(constraints.allows(&word("дверь")));
    }

    #[test]
    fn allows_respects_fixed_positions() {
        let mut constraints = ConstraintSet::new();
        constraints.fixed.insert(0, 'к');
        constraints.required.insert('к');

        assert!(constraints.allows(&word("книга")));
        assert!(!constraints.allows(&word("мышка"))); // has 'к', wrong position
    }

    #[test]
    fn allows_respects_position_exclusions() {
        let mut constraints = ConstraintSet::new();
        constraints.required.insert('к');
        constraints.excluded_at[0].insert('к');

        assert!(!constraints.allows(&word("книга")));
        assert!(constraints.allows(&word("мышка")));
    }

    #[test]
    fn empty_constraints_allow_everything() {
        let constraints = ConstraintSet::new();
        for w in ["книга", "дверь", "мышка", "ручей"] {
            assert!(constraints.allows(&word(w)));
        }
    }
}
