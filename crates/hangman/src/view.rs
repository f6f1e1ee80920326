//! Serializable snapshot of a session.

use crate::status::GameStatus;
use serde::{Deserialize, Serialize};

/// What a player is allowed to see of their session.
///
/// `letters_left` and `answer` are only present once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    /// Round status.
    pub status: GameStatus,
    /// Incorrect guesses allowed per round.
    pub max_guesses: u32,
    /// Incorrect guesses still available.
    pub guesses_left: u32,
    /// Letters guessed this round, sorted.
    pub letters_guessed: Vec<char>,
    /// The answer with unrevealed letters replaced by the blank glyph.
    pub word_with_blanks: String,
    /// Rounds won by this session.
    pub won: u32,
    /// Rounds lost by this session.
    pub lost: u32,
    /// Letters the player never found, sorted. Terminal rounds only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters_left: Option<Vec<char>>,
    /// The full answer. Terminal rounds only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}
