//! Word representation and normalization
//!
//! A `Word` stores a normalized 5-letter Russian word with per-position access.

use std::fmt;

/// Number of letters in every playable word.
pub const WORD_LENGTH: usize = 5;

/// Normalize a raw string for comparison and storage.
///
/// Lower-cases every character, folds `ё` to `е`, and strips anything
/// outside the Russian alphabet `а..=я`.
///
/// # Examples
/// ```
/// use wordle_ru::core::normalize;
///
/// assert_eq!(normalize("КнИгА"), "книга");
/// assert_eq!(normalize("берёза"), "береза");
/// assert_eq!(normalize("мёд-12"), "мед");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .filter(|c| ('а'..='я').contains(c))
        .collect()
}

/// A normalized 5-letter word
///
/// Always stored case-folded and ё-folded; equality and hashing use the
/// normalized form, so `Word::new("КНИГА")` equals `Word::new("книга")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The input did not normalize to exactly 5 letters.
    InvalidLength(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a raw string
    ///
    /// Normalizes the input first; characters outside the alphabet are
    /// dropped before the length check, so `"дверь!"` is accepted while
    /// `"стол"` and `"столик"` are not.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the normalized input is not
    /// exactly 5 letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::core::Word;
    ///
    /// let word = Word::new("Книга").unwrap();
    /// assert_eq!(word.text(), "книга");
    ///
    /// assert!(Word::new("стол").is_err());
    /// assert!(Word::new("столик").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let text = normalize(raw);

        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = ['\0'; WORD_LENGTH];
        for (i, c) in text.chars().enumerate() {
            letters[i] = c;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the five letters in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count occurrences of a letter in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
