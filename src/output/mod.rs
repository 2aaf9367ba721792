//! Terminal output formatting

pub mod formatters;

pub use formatters::{colorize_guess, verdict_markers};
