//! The game dictionary
//!
//! An immutable collection of playable words. Loaded once and shared by
//! reference (`Arc`) across any number of sessions; never cloned per session.

use crate::core::Word;
use crate::game::ConstraintSet;
use rustc_hash::FxHashSet;

/// Immutable set of playable 5-letter words
///
/// Preserves the input order for scans and keeps a hash index for O(1)
/// membership checks. Duplicate entries are dropped on construction.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from validated words, dropping duplicates
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let mut unique = Vec::with_capacity(words.len());

        for word in words {
            if index.insert(word.clone()) {
                unique.push(word);
            }
        }

        Self {
            words: unique,
            index,
        }
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in input order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Membership check on an already-normalized word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words consistent with the given constraints
    ///
    /// Linear scan preserving input order. An empty result is not an error;
    /// callers treat it as "no hint available".
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::core::Word;
    /// use wordle_ru::game::ConstraintSet;
    /// use wordle_ru::wordlists::Dictionary;
    ///
    /// let words = ["книга", "дверь"].iter().map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words.collect());
    ///
    /// let unconstrained = dictionary.candidates(&ConstraintSet::new());
    /// assert_eq!(unconstrained.len(), 2);
    /// ```
    #[must_use]
    pub fn candidates(&self, constraints: &ConstraintSet) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| constraints.allows(word))
            .collect()
    }
}
