//! Word lists and the shared game dictionary
//!
//! The dictionary is loaded once, wrapped in an `Arc`, and shared read-only
//! across sessions.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
