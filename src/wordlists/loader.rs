//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the built-in list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Built-in Russian noun list, used when no dictionary file is given.
const BUILTIN: &str = include_str!("../../data/words.txt");

/// Load words from a file
///
/// Reads the file as UTF-8, normalizes every line, and keeps only the
/// entries that validate to exactly 5 letters. Invalid lines are skipped
/// silently, matching the lenient loading of the dictionary file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_ru::wordlists::loader::load_from_file;
///
/// let words = load_from_file("russian_nouns.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse a newline-separated word list, keeping the valid 5-letter words
#[must_use]
pub fn words_from_lines(text: &str) -> Vec<Word> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// The built-in word list
///
/// # Examples
/// ```
/// use wordle_ru::wordlists::loader::builtin_words;
///
/// let words = builtin_words();
/// assert!(!words.is_empty());
/// ```
#[must_use]
pub fn builtin_words() -> Vec<Word> {
    words_from_lines(BUILTIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_keeps_valid_words() {
        let words = words_from_lines("книга\nдверь\nмышка\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["книга", "дверь", "мышка"]);
    }

    #[test]
    fn words_from_lines_skips_wrong_lengths() {
        let words = words_from_lines("книга\nстол\nстолик\nдверь");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_lines_skips_blank_lines() {
        let words = words_from_lines("\n  \nкнига\n\n");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn words_from_lines_normalizes() {
        let words = words_from_lines("КнИгА\nберёз\nмёдик");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["книга", "берез", "медик"]);
    }

    #[test]
    fn builtin_words_are_nonempty_and_valid() {
        let words = builtin_words();
        assert!(!words.is_empty());
        for word in &words {
            assert_eq!(word.text().chars().count(), 5);
        }
    }
}
