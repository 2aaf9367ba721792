//! Formatting utilities for terminal output

use crate::core::{Verdict, VerdictSequence, Word};
use colored::Colorize;

/// Format a verdict sequence as its five-marker string (`+`, `^`, `-`)
///
/// This is the plain-text encoding shared with any display layer.
#[must_use]
pub fn verdict_markers(verdicts: &VerdictSequence) -> String {
    verdicts.to_string()
}

/// Render a guess with each letter colored by its verdict
///
/// Green for Exact, yellow for Present, dimmed for Absent.
#[must_use]
pub fn colorize_guess(word: &Word, verdicts: &VerdictSequence) -> String {
    word.letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            let s = letter.to_string();
            match verdicts.at(i) {
                Verdict::Exact => s.green().bold().to_string(),
                Verdict::Present => s.yellow().to_string(),
                Verdict::Absent => s.dimmed().to_string(),
            }
        })
        .collect()
}
