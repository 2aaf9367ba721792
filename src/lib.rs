//! Wordle over the Russian alphabet
//!
//! Feedback analysis, cumulative constraint tracking, and hint filtering for
//! a five-letter word-guessing game, plus a console front-end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ru::core::{VerdictSequence, Word};
//!
//! let guess = Word::new("слони").unwrap();
//! let answer = Word::new("столи").unwrap();
//!
//! let verdicts = VerdictSequence::analyze(&guess, &answer);
//! assert_eq!(verdicts.to_string(), "+^+-+");
//! ```

// Core domain types
pub mod core;

// Constraint tracking and the session state machine
pub mod game;

// Dictionary loading and candidate filtering
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
