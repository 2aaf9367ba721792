//! Core domain types
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod verdict;
mod word;

pub use verdict::{Verdict, VerdictSequence};
pub use word::{WORD_LENGTH, Word, WordError, normalize};
