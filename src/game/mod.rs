//! Game logic: constraint tracking and the session state machine

mod constraints;
mod session;

pub use constraints::ConstraintSet;
pub use session::{ATTEMPT_LIMIT, Attempt, GameError, GameState, Session};
