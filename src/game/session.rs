//! Game session state machine
//!
//! A `Session` owns the secret word, the attempt history, and the
//! accumulated constraints, and enforces the turn and termination rules.

use super::constraints::ConstraintSet;
use crate::core::{VerdictSequence, Word, WordError};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;

/// Attempts available in a fresh session.
pub const ATTEMPT_LIMIT: u8 = 6;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Attempts remain and the secret has not been guessed.
    InProgress,
    /// The secret was guessed. Terminal.
    Won,
    /// All attempts were used without guessing the secret. Terminal.
    Lost,
}

/// One submitted guess together with its verdicts, append-only history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    verdicts: VerdictSequence,
}

impl Attempt {
    /// The guessed word
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The per-position verdicts for this guess
    #[must_use]
    pub fn verdicts(&self) -> &VerdictSequence {
        &self.verdicts
    }

    /// Whether this attempt guessed the secret
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.verdicts.is_all_exact()
    }
}

/// Error type for session operations
///
/// Every variant is a recoverable, caller-local condition; none aborts the
/// process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input did not normalize to 5 letters. The attempt is not consumed.
    InvalidLength(usize),
    /// Normalized input is not in the dictionary. The attempt is not consumed.
    WordNotFound(String),
    /// An attempt was submitted after the session reached a terminal state.
    GameOver,
    /// A session cannot be constructed from zero words.
    EmptyDictionary,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::WordNotFound(word) => write!(f, "Word not found in dictionary: {word}"),
            Self::GameOver => write!(f, "The game is over, no attempts remain"),
            Self::EmptyDictionary => write!(f, "Cannot start a game with an empty dictionary"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
        }
    }
}

/// A single game of guessing one secret word
///
/// Exclusively owned by one caller for its lifetime; the dictionary behind
/// the `Arc` is read-only and may be shared across sessions. The random
/// source is injected so tests can make secret and hint selection
/// deterministic.
pub struct Session {
    dictionary: Arc<Dictionary>,
    secret: Word,
    remaining: u8,
    attempts: Vec<Attempt>,
    constraints: ConstraintSet,
    state: GameState,
    rng: StdRng,
}

impl Session {
    /// Start a session with an OS-seeded random source
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the dictionary has no words.
    pub fn new(dictionary: Arc<Dictionary>) -> Result<Self, GameError> {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Start a session with an explicit random source
    ///
    /// The secret is drawn uniformly from the dictionary; the same source is
    /// later used for hint selection. Seed the source for reproducible games.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the dictionary has no words.
    pub fn with_rng(dictionary: Arc<Dictionary>, mut rng: StdRng) -> Result<Self, GameError> {
        let secret = dictionary
            .words()
            .choose(&mut rng)
            .cloned()
            .ok_or(GameError::EmptyDictionary)?;

        Ok(Self {
            dictionary,
            secret,
            remaining: ATTEMPT_LIMIT,
            attempts: Vec::new(),
            constraints: ConstraintSet::new(),
            state: GameState::InProgress,
            rng,
        })
    }

    /// Submit a guess
    ///
    /// Normalizes and validates the input, analyzes it against the secret,
    /// appends the attempt, and advances the state machine. Validation
    /// failures (`InvalidLength`, `WordNotFound`) never consume an attempt;
    /// the caller should re-prompt.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session is already terminal.
    /// - `GameError::InvalidLength` if the input does not normalize to 5 letters.
    /// - `GameError::WordNotFound` if the word is not in the dictionary.
    pub fn submit_attempt(&mut self, raw: &str) -> Result<Attempt, GameError> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameOver);
        }

        let word = Word::new(raw)?;
        if !self.dictionary.contains(&word) {
            return Err(GameError::WordNotFound(word.text().to_string()));
        }

        let verdicts = VerdictSequence::analyze(&word, &self.secret);
        self.constraints.update(&word, &verdicts);
        self.remaining -= 1;

        let won = word == self.secret;
        let attempt = Attempt { word, verdicts };
        self.attempts.push(attempt.clone());

        // The decrement happens before the win check: a win on the last
        // attempt is a win, not a loss.
        if won {
            self.state = GameState::Won;
        } else if self.remaining == 0 {
            self.state = GameState::Lost;
        }

        Ok(attempt)
    }

    /// Suggest a word consistent with everything learned so far
    ///
    /// Filters the dictionary with the current constraints and picks one
    /// candidate uniformly at random. Valid in any state; never consumes an
    /// attempt; only the random source advances.
    ///
    /// Returns `None` when no dictionary word satisfies the constraints.
    pub fn request_hint(&mut self) -> Option<Word> {
        let candidates = self.dictionary.candidates(&self.constraints);
        candidates.choose(&mut self.rng).map(|&word| word.clone())
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether the session is in a terminal state
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Whether the secret was guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Attempts still available
    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        self.remaining
    }

    /// All attempts made so far, in submission order
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The secret word (revealed to the caller at the end of the game)
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// The constraints accumulated from the attempt history
    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }
}
