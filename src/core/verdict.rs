//! Verdict computation for a guess against the answer
//!
//! A verdict sequence encodes the per-position feedback using three markers:
//! - `+` = Exact (letter in the correct position)
//! - `^` = Present (letter in the word, wrong position)
//! - `-` = Absent (letter not in the word)
//!
//! The marker characters are a compatibility contract with rendering layers
//! and must not change.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Guessed letter matches the answer at this position.
    Exact,
    /// Letter occurs in the answer, but not at this position.
    Present,
    /// Letter does not occur in the answer (or all its occurrences were
    /// already consumed by higher-priority matches).
    Absent,
}

impl Verdict {
    /// The fixed display marker for this verdict.
    #[inline]
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Exact => '+',
            Self::Present => '^',
            Self::Absent => '-',
        }
    }
}

/// Ordered per-position feedback for a complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerdictSequence([Verdict; WORD_LENGTH]);

impl VerdictSequence {
    /// Compute the verdicts when `guess` is guessed and `answer` is the secret
    ///
    /// Implements the duplicate-letter-correct two-pass rule:
    /// 1. First pass: mark exact position matches and consume those answer
    ///    positions.
    /// 2. Second pass: for every remaining guess position, scan the answer's
    ///    unconsumed positions left to right; the first match is marked
    ///    Present and consumed. Everything else is Absent.
    ///
    /// Consumption guarantees that a letter appearing k times in the guess
    /// and m times in the answer yields at most min(k, m) Exact/Present
    /// marks, with Exact taking priority.
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::core::{VerdictSequence, Word};
    ///
    /// let guess = Word::new("слони").unwrap();
    /// let answer = Word::new("столи").unwrap();
    /// let verdicts = VerdictSequence::analyze(&guess, &answer);
    ///
    /// assert_eq!(verdicts.to_string(), "+^+-+");
    /// ```
    #[must_use]
    pub fn analyze(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact matches
        // Allow: index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == answer.letter_at(i) {
                result[i] = Verdict::Exact;
                consumed[i] = true;
            }
        }

        // Second pass: present letters, first unconsumed answer position wins
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Exact {
                continue;
            }

            let letter = guess.letter_at(i);
            for j in 0..WORD_LENGTH {
                if !consumed[j] && answer.letter_at(j) == letter {
                    result[i] = Verdict::Present;
                    consumed[j] = true;
                    break;
                }
            }
        }

        Self(result)
    }

    /// The verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// The five verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every position is Exact (a winning guess)
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Exact)
    }
}

impl fmt::Display for VerdictSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.marker())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn markers(guess: &str, answer: &str) -> String {
        VerdictSequence::analyze(&word(guess), &word(answer)).to_string()
    }

    /// Count of Exact plus Present marks for one letter of the guess.
    fn hits_for(verdicts: &VerdictSequence, guess: &Word, letter: char) -> usize {
        verdicts
            .verdicts()
            .iter()
            .enumerate()
            .filter(|&(i, &v)| guess.letter_at(i) == letter && v != Verdict::Absent)
            .count()
    }

    #[test]
    fn analyze_word_against_itself_is_all_exact() {
        for w in ["столи", "книга", "мышка", "ааааа"] {
            let verdicts = VerdictSequence::analyze(&word(w), &word(w));
            assert!(verdicts.is_all_exact());
            assert_eq!(verdicts.to_string(), "+++++");
        }
    }

    #[test]
    fn analyze_disjoint_words_is_all_absent() {
        assert_eq!(markers("абвгд", "столи"), "-----");
    }

    #[test]
    fn analyze_exact_and_absent_mix() {
        // стуль vs столи: с, т, л exact; у, ь absent
        assert_eq!(markers("стуль", "столи"), "++-+-");
    }

    #[test]
    fn analyze_present_letter() {
        // слони vs столи: с, о, и exact; л present (answer position 3); н absent
        assert_eq!(markers("слони", "столи"), "+^+-+");
    }

    #[test]
    fn analyze_duplicate_guess_letters_consume_once() {
        // Answer has a single 'а'; only the first unmatched 'а' of the guess
        // may be Present.
        let verdicts = VerdictSequence::analyze(&word("анала"), &word("стола"));
        assert_eq!(verdicts.at(4), Verdict::Exact);
        // The exact match consumed the only 'а', so positions 0 and 2 are Absent
        assert_eq!(verdicts.at(0), Verdict::Absent);
        assert_eq!(verdicts.at(2), Verdict::Absent);
    }

    #[test]
    fn analyze_exact_takes_priority_over_present() {
        // гамма vs магма: the exact 'м' at guess position 3 consumes answer
        // position 3 in pass 1, so the Present scan for guess position 2 can
        // only take the 'м' at answer position 0.
        let verdicts = VerdictSequence::analyze(&word("гамма"), &word("магма"));
        assert_eq!(verdicts.at(1), Verdict::Exact);
        assert_eq!(verdicts.at(3), Verdict::Exact);
        assert_eq!(verdicts.at(4), Verdict::Exact);
        assert_eq!(verdicts.at(0), Verdict::Present); // г at answer position 2
        assert_eq!(verdicts.at(2), Verdict::Present); // м at answer position 0
    }

    #[test]
    fn analyze_hits_never_exceed_answer_count() {
        let cases = [
            ("анала", "стола"),
            ("гамма", "магма"),
            ("ааааа", "абвга"),
            ("мамам", "папам"),
        ];
        for (g, a) in cases {
            let guess = word(g);
            let answer = word(a);
            let verdicts = VerdictSequence::analyze(&guess, &answer);
            for letter in guess.letters() {
                let hits = hits_for(&verdicts, &guess, *letter);
                let bound = guess.count_of(*letter).min(answer.count_of(*letter));
                assert!(
                    hits <= bound,
                    "{g} vs {a}: letter {letter} got {hits} hits, bound {bound}"
                );
            }
        }
    }

    #[test]
    fn analyze_present_consumes_leftmost_unconsumed() {
        // Guess has 'а' at positions 0 and 2; answer "варан" has 'а' at 1 and 3.
        // Position 0 consumes answer position 1, position 2 consumes answer
        // position 3; a third 'а' would be Absent.
        let verdicts = VerdictSequence::analyze(&word("абака"), &word("варан"));
        assert_eq!(verdicts.at(0), Verdict::Present);
        assert_eq!(verdicts.at(2), Verdict::Present);
        assert_eq!(verdicts.at(4), Verdict::Absent);
    }

    #[test]
    fn verdict_markers_are_fixed() {
        assert_eq!(Verdict::Exact.marker(), '+');
        assert_eq!(Verdict::Present.marker(), '^');
        assert_eq!(Verdict::Absent.marker(), '-');
    }
}
