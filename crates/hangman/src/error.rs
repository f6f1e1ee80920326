//! Error types for hangman games and vocabularies.

use crate::view::GameStateView;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a guess was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GuessErrorKind {
    /// The round already ended in a win or a loss.
    #[display("Game is already over")]
    GameOver,

    /// The guess was not a single character of the alphabet.
    #[display("Invalid guess '{}' was made", _0)]
    InvalidLetter(String),

    /// The letter was already guessed this round.
    #[display("You already guessed '{}'", _0)]
    DuplicateGuess(char),
}

/// A rejected guess, together with the unchanged state of the session.
///
/// Callers can render both the reason and where the game stands without
/// querying the session again.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", kind)]
pub struct GuessError {
    kind: GuessErrorKind,
    state: GameStateView,
}

impl GuessError {
    /// Creates a guess error carrying the pre-failure state.
    pub fn new(kind: GuessErrorKind, state: GameStateView) -> Self {
        Self { kind, state }
    }

    /// Returns the reason the guess was rejected.
    pub fn kind(&self) -> &GuessErrorKind {
        &self.kind
    }

    /// Returns the session state at the time of the rejection.
    pub fn state(&self) -> &GameStateView {
        &self.state
    }

    /// Splits the error into its kind and state.
    pub fn into_parts(self) -> (GuessErrorKind, GameStateView) {
        (self.kind, self.state)
    }
}

impl std::error::Error for GuessError {}

/// An answer that cannot be played with the configured alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid answer '{}': {}", answer, reason)]
pub struct InvalidAnswer {
    /// The offending answer, after trimming and case folding.
    pub answer: String,
    /// What is wrong with it.
    pub reason: String,
}

impl InvalidAnswer {
    /// Creates a new invalid-answer error.
    #[instrument(skip(answer, reason))]
    pub fn new(answer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            reason: reason.into(),
        }
    }
}

/// No vocabulary word can be won within the guess budget.
///
/// This is a configuration fault: the server cannot start a playable round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "No eligible words: {} word(s) in vocabulary, none with at most {} distinct letters",
    total,
    max_distinct
)]
pub struct EmptyVocabularyError {
    /// Words in the vocabulary before the distinct-letter filter.
    pub total: usize,
    /// Distinct-letter limit that every word exceeded.
    pub max_distinct: usize,
}

/// Vocabulary file could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("Vocabulary error: {} ({}) at {}:{}", message, path, file, line)]
pub struct VocabularyError {
    /// Path of the vocabulary file.
    pub path: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl VocabularyError {
    /// Creates a new vocabulary error with caller location tracking.
    #[track_caller]
    #[instrument(skip(path, message))]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.into(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
